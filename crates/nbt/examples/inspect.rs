//! Simple decoder to inspect NBT files.

use std::fs;

use nbt::{decode_named, decompress, detect, Compound, List, Value};

fn format_value(v: &Value) -> String {
    match v {
        Value::String(s) => {
            let preview: String = s.chars().take(80).collect();
            if s.chars().count() > 80 {
                format!("\"{}...\"", preview)
            } else {
                format!("\"{}\"", preview)
            }
        }
        Value::Byte(b) => format!("{}b", b),
        Value::Short(s) => format!("{}s", s),
        Value::Int(i) => format!("{}", i),
        Value::Long(l) => format!("{}L", l),
        Value::Float(f) => format!("{:.6}f", f),
        Value::Double(d) => format!("{:.6}d", d),
        Value::ByteArray(b) => format!("BYTES[{}]", b.len()),
        Value::List(l) => format!("LIST<{}>[{}]", l.element_tag(), l.len()),
        Value::Compound(c) => format!("COMPOUND{{{} entries}}", c.len()),
    }
}

fn print_compound(c: &Compound, indent: usize) {
    for (name, value) in c {
        println!("{:indent$}{}: {}", "", name, format_value(value), indent = indent);
        print_children(value, indent + 2);
    }
}

fn print_list(l: &List, indent: usize) {
    for (i, value) in l.iter().enumerate().take(20) {
        println!("{:indent$}[{}] {}", "", i, format_value(value), indent = indent);
        print_children(value, indent + 2);
    }
    if l.len() > 20 {
        println!("{:indent$}... and {} more elements", "", l.len() - 20, indent = indent);
    }
}

fn print_children(value: &Value, indent: usize) {
    match value {
        Value::Compound(c) => print_compound(c, indent),
        Value::List(l) => print_list(l, indent),
        _ => {}
    }
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "bigtest.nbt".to_string());

    println!("Reading: {}", path);

    let data = fs::read(&path).expect("Failed to read file");
    println!("File size: {} bytes", data.len());
    println!("Container: {:?}", detect(&data));

    let raw = decompress(&data).expect("Failed to decompress");
    let (name, root) = decode_named(&raw).expect("Failed to decode");

    println!("\n=== Root ===");
    if !name.is_empty() {
        println!("Name: {}", name);
    }
    println!("Entries: {}", root.len());
    println!("Uncompressed size: {} bytes", raw.len());

    println!("\n=== Tree ===");
    print_compound(&root, 0);
}
