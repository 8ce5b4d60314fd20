//! Golden vector validation
//!
//! Each vector holds an input armor block, a payload, and the exact armored
//! output produced by the reference tool.

use anyhow::Result;
use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GoldenVector {
    armor: String,
    payload: String,
    output: String,
    comment: String,
}

fn load_golden_vectors() -> Result<Vec<GoldenVector>> {
    let json_data = include_str!("../testdata/golden-vectors.json");
    let vectors: Vec<GoldenVector> = serde_json::from_str(json_data)?;
    Ok(vectors)
}

#[test]
fn test_golden_vectors() {
    let vectors = load_golden_vectors().expect("failed to load golden vectors");
    println!("Testing {} golden vectors", vectors.len());

    let mut passed = 0;
    let mut failed = 0;

    for (i, vector) in vectors.iter().enumerate() {
        let payload = BASE64_STANDARD
            .decode(&vector.payload)
            .expect("failed to decode payload");

        let injected = match keyinject::inject(&vector.armor, &payload) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Vector {}: FAILED to inject - {}", i, e.chain_message());
                eprintln!("  Comment: {}", vector.comment);
                failed += 1;
                continue;
            }
        };

        if injected != vector.output {
            eprintln!("Vector {}: FAILED - output mismatch", i);
            eprintln!("  Comment: {}", vector.comment);
            eprintln!("  Expected: {}", vector.output);
            eprintln!("  Actual:   {}", injected);
            failed += 1;
            continue;
        }

        // The output must also decode to packet || original.
        let original = keyinject::decode_armor(&vector.armor).expect("failed to decode input");
        let mut expected = keyinject::build_literal_packet(&payload).expect("packet");
        expected.extend_from_slice(&original);
        if keyinject::decode_armor(&injected).ok() != Some(expected) {
            eprintln!("Vector {}: FAILED - decoded output mismatch", i);
            eprintln!("  Comment: {}", vector.comment);
            failed += 1;
            continue;
        }

        passed += 1;
    }

    println!(
        "Results: {} passed, {} failed out of {} total",
        passed,
        failed,
        passed + failed
    );

    assert_eq!(failed, 0, "Some golden vectors failed validation");
    assert!(passed > 0, "No golden vectors were tested");
}
