//! Benchmark for NBT serialization.
//!
//! Converts a JSON document (or a generated world-like document) into a
//! compound, then times encoding and decoding with each compression
//! container.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::{Duration, Instant};

use nbt::{Compound, CompoundBuilder, Compression, List, Value};
use serde::Serialize;

const DECODE_ITERS: u32 = 10;

// =============================================================================
// JSON IMPORT
// =============================================================================

/// Converts a JSON value. Integers get the narrowest tag that holds them.
fn json_to_value(json: serde_json::Value, path: &str) -> Result<Value, String> {
    match json {
        serde_json::Value::Null => Err(format!("{path}: null has no NBT representation")),
        serde_json::Value::Bool(b) => Ok(Value::from(b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from_int(i).map_err(|e| format!("{path}: {e}"))
            } else if let Some(u) = n.as_u64() {
                Value::from_int(u).map_err(|e| format!("{path}: {e}"))
            } else {
                n.as_f64()
                    .map(Value::Double)
                    .ok_or_else(|| format!("{path}: unrepresentable number {n}"))
            }
        }
        serde_json::Value::String(s) => Ok(Value::String(s)),
        serde_json::Value::Array(items) => {
            let values = items
                .into_iter()
                .enumerate()
                .map(|(i, item)| json_to_value(item, &format!("{path}[{i}]")))
                .collect::<Result<Vec<_>, _>>()?;
            List::try_from(widen_integers(values))
                .map(Value::List)
                .map_err(|e| format!("{path}: {e}"))
        }
        serde_json::Value::Object(map) => json_to_compound(map, path).map(Value::Compound),
    }
}

fn json_to_compound(
    map: serde_json::Map<String, serde_json::Value>,
    path: &str,
) -> Result<Compound, String> {
    let mut compound = Compound::with_capacity(map.len());
    for (key, value) in map {
        let child = json_to_value(value, &format!("{path}.{key}"))?;
        compound.insert(key, child);
    }
    Ok(compound)
}

/// Narrowing is per value, so `[1, 1000]` would mix BYTE and SHORT. Lists
/// made only of integers are widened to their widest member.
fn widen_integers(values: Vec<Value>) -> Vec<Value> {
    let all_ints = values.iter().all(|v| v.as_i64().is_some());
    if !all_ints || values.is_empty() {
        return values;
    }
    let widest = values.iter().map(Value::tag).max_by_key(|t| t.as_u8());
    values
        .into_iter()
        .map(|v| {
            let n = v.as_i64().unwrap_or_default();
            match widest {
                Some(nbt::Tag::Short) => Value::Short(n as i16),
                Some(nbt::Tag::Int) => Value::Int(n as i32),
                Some(nbt::Tag::Long) => Value::Long(n),
                _ => v,
            }
        })
        .collect()
}

fn load_json(path: &Path) -> Result<(Compound, usize), String> {
    let raw = fs::read(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let text = if path.extension().is_some_and(|ext| ext == "gz") {
        let mut decoder = flate2::read::GzDecoder::new(raw.as_slice());
        let mut decompressed = String::new();
        decoder
            .read_to_string(&mut decompressed)
            .map_err(|e| format!("failed to decompress: {e}"))?;
        decompressed
    } else {
        String::from_utf8(raw).map_err(|e| format!("input is not UTF-8: {e}"))?
    };

    let json: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| format!("failed to parse JSON: {e}"))?;
    match json {
        serde_json::Value::Object(map) => Ok((json_to_compound(map, "$")?, text.len())),
        _ => Err("JSON root must be an object".to_string()),
    }
}

// =============================================================================
// GENERATED DATA
// =============================================================================

/// Builds a world-like document: a level header plus `chunks` chunk records.
fn generate_world(chunks: usize) -> Compound {
    let chunk_list: Vec<Compound> = (0..chunks)
        .map(|i| {
            let x = (i % 64) as i32;
            let z = (i / 64) as i32;
            let heightmap: Vec<i32> = (0..256).map(|h| 60 + ((h * 7 + i) % 16) as i32).collect();
            let blocks: Vec<i8> = (0..4096).map(|b| ((b * 31 + i) % 17) as i8).collect();
            CompoundBuilder::new()
                .int("xPos", x)
                .int("zPos", z)
                .long("LastUpdate", 1264099775885 + i as i64)
                .byte("TerrainPopulated", 1)
                .list("HeightMap", List::from(heightmap))
                .byte_array("Blocks", blocks)
                .list(
                    "Entities",
                    List::from(vec![
                        CompoundBuilder::new()
                            .string("id", "Pig")
                            .list("Pos", List::from(vec![x as f64 * 16.0, 64.0, z as f64 * 16.0]))
                            .float("Health", 10.0)
                            .build(),
                    ]),
                )
                .build()
        })
        .collect();

    CompoundBuilder::new()
        .compound("Data", |c| {
            c.string("LevelName", "bench")
                .long("RandomSeed", -4_172_144_997_902_289_642)
                .int("SpawnX", 0)
                .int("SpawnY", 64)
                .int("SpawnZ", 0)
        })
        .list("Chunks", List::from(chunk_list))
        .build()
}

// =============================================================================
// REPORT
// =============================================================================

#[derive(Debug, Serialize)]
struct Measurement {
    container: &'static str,
    bytes: usize,
    encode_micros: u128,
    decode_micros: u128,
}

#[derive(Debug, Serialize)]
struct Report {
    source: String,
    source_bytes: Option<usize>,
    entries: usize,
    measurements: Vec<Measurement>,
}

fn throughput(bytes: usize, time: Duration) -> f64 {
    (bytes as f64 / 1_000_000.0) / time.as_secs_f64().max(f64::MIN_POSITIVE)
}

fn measure(
    root: &Compound,
    container: &'static str,
    compression: Compression,
    uncompressed_len: usize,
) -> Measurement {
    let encode_start = Instant::now();
    let encoded = nbt::encode_compressed(root, "", compression).expect("Failed to encode");
    let encode_time = encode_start.elapsed();

    // Warmup
    for _ in 0..3 {
        let _ = nbt::decode_compressed(&encoded).expect("Failed to decode");
    }

    let decode_start = Instant::now();
    let mut decoded = None;
    for _ in 0..DECODE_ITERS {
        decoded = Some(nbt::decode_compressed(&encoded).expect("Failed to decode"));
    }
    let decode_time = decode_start.elapsed() / DECODE_ITERS;
    assert_eq!(decoded.as_ref(), Some(root), "round trip changed the document");

    println!("\n{}: {} bytes", container, encoded.len());
    println!(
        "  Encode: {:?} ({:.2} MB/s)",
        encode_time,
        throughput(uncompressed_len, encode_time)
    );
    println!(
        "  Decode: {:?} avg of {} ({:.2} MB/s, uncompressed equivalent)",
        decode_time,
        DECODE_ITERS,
        throughput(uncompressed_len, decode_time)
    );
    if encoded.len() != uncompressed_len {
        println!(
            "  Compression ratio: {:.1}x",
            uncompressed_len as f64 / encoded.len() as f64
        );
    }

    Measurement {
        container,
        bytes: encoded.len(),
        encode_micros: encode_time.as_micros(),
        decode_micros: decode_time.as_micros(),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let json_report = args.iter().any(|a| a == "--json");
    let input = args.iter().find(|a| !a.starts_with("--"));

    let (root, source, source_bytes) = match input {
        Some(path) => {
            println!("Loading JSON from: {}", path);
            let load_start = Instant::now();
            let (root, len) = load_json(Path::new(path)).unwrap_or_else(|e| {
                eprintln!("error: {e}");
                std::process::exit(1);
            });
            println!("Converted in {:?}", load_start.elapsed());
            (root, path.clone(), Some(len))
        }
        None => {
            println!("No input given, generating a 1024-chunk world");
            (generate_world(1024), "generated".to_string(), None)
        }
    };

    let uncompressed = nbt::encode(&root, "").expect("Failed to encode");
    let deterministic = nbt::encode(&root, "").expect("Failed to encode");
    assert_eq!(uncompressed, deterministic, "Encoding should be deterministic");

    let measurements = vec![
        measure(&root, "uncompressed", Compression::None, uncompressed.len()),
        measure(&root, "gzip-6", Compression::Gzip { level: 6 }, uncompressed.len()),
        measure(&root, "zstd-3", Compression::Zstd { level: 3 }, uncompressed.len()),
    ];

    if let Some(len) = source_bytes {
        println!("\n=== Summary ===");
        println!("JSON size: {} bytes ({:.1} MB)", len, len as f64 / 1_000_000.0);
        println!(
            "NBT size vs JSON: {:.1}% (uncompressed)",
            100.0 * uncompressed.len() as f64 / len as f64
        );
    }

    if json_report {
        let report = Report {
            source,
            source_bytes,
            entries: root.len(),
            measurements,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("error: failed to serialize report: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_integers_are_narrowed() {
        let json = serde_json::json!({ "small": 5, "medium": 1000, "big": 5_000_000_000i64 });
        let serde_json::Value::Object(map) = json else {
            unreachable!()
        };
        let root = json_to_compound(map, "$").unwrap();
        assert_eq!(root.get("small"), Some(&Value::Byte(5)));
        assert_eq!(root.get("medium"), Some(&Value::Short(1000)));
        assert_eq!(root.get("big"), Some(&Value::Long(5_000_000_000)));
    }

    #[test]
    fn test_json_integer_lists_are_widened() {
        let value = json_to_value(serde_json::json!([1, 1000, 70000]), "$").unwrap();
        let list = value.as_list().unwrap();
        assert_eq!(list.element_tag(), nbt::Tag::Int);
        assert_eq!(list.get(0), Some(&Value::Int(1)));
    }

    #[test]
    fn test_json_rejects_null_and_mixed_lists() {
        assert!(json_to_value(serde_json::Value::Null, "$").is_err());
        assert!(json_to_value(serde_json::json!([1, "a"]), "$").is_err());
        assert!(json_to_value(serde_json::json!(u64::MAX), "$").is_err());
    }

    #[test]
    fn test_generated_world_roundtrips() {
        let root = generate_world(4);
        let bytes = nbt::encode(&root, "").unwrap();
        assert_eq!(nbt::decode(&bytes).unwrap(), root);
    }
}
