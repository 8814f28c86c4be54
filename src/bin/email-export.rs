use email_builder::{compile, deserialize, suggested_filename, TemplateError};
use std::env;
use std::fs;
use std::path::Path;
use std::process;

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut base_url = DEFAULT_BASE_URL.to_string();
    let mut files: Vec<String> = Vec::new();
    let mut iter = args[1..].iter();
    while let Some(arg) = iter.next() {
        if arg == "--base-url" {
            match iter.next() {
                Some(url) => base_url = url.clone(),
                None => {
                    eprintln!("--base-url requires a value");
                    process::exit(1);
                }
            }
        } else {
            files.push(arg.clone());
        }
    }

    if files.is_empty() {
        eprintln!("Usage: email-export [--base-url URL] <template.json>...");
        eprintln!();
        eprintln!("Reads saved template text (structured JSON or a legacy plain");
        eprintln!("body), compiles it to a standalone HTML email, and writes");
        eprintln!("<slug>-template.html next to the input.");
        process::exit(1);
    }

    let mut exit_code = 0;
    for file_path in files {
        match export_file(&file_path, &base_url) {
            Ok(out) => {
                println!("✓ {} -> {}", file_path, out);
            }
            Err(e) => {
                eprintln!("✗ {}: {}", file_path, e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn export_file(path: &str, base_url: &str) -> Result<String, TemplateError> {
    let text = fs::read_to_string(path)?;
    let mut doc = deserialize(&text, None);

    // Legacy bodies carry no title; fall back to the input's file stem.
    if doc.title.is_empty() {
        doc.title = Path::new(path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();
    }

    let out_name = suggested_filename(&doc.title);
    let out_path = Path::new(path)
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(&out_name);
    fs::write(&out_path, compile(&doc, base_url))?;
    Ok(out_path.display().to_string())
}
