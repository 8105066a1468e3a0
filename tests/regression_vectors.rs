use deltarow::{EncodeError, encode, encode_into};

#[derive(Debug)]
struct Vector {
    name: String,
    expected: Vec<u8>,
    input: Vec<u8>,
    seed: Vec<u8>,
}

fn hex_to_bytes(s: &str) -> Vec<u8> {
    let s = s.trim();
    if s.is_empty() {
        return Vec::new();
    }
    assert!(
        s.len().is_multiple_of(2),
        "hex string must have even length"
    );
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

fn load_vectors() -> Vec<Vector> {
    let manifest = include_str!("vectors/manifest.tsv");
    manifest
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|line| {
            let parts: Vec<_> = line.split('|').collect();
            assert_eq!(parts.len(), 4, "invalid vector row: {line}");
            Vector {
                name: parts[0].to_string(),
                expected: hex_to_bytes(parts[1]),
                input: hex_to_bytes(parts[2]),
                seed: hex_to_bytes(parts[3]),
            }
        })
        .collect()
}

#[test]
fn vector_database_is_non_empty() {
    let vectors = load_vectors();
    assert!(!vectors.is_empty());
    for v in &vectors {
        assert_eq!(v.input.len(), v.seed.len(), "vector {}", v.name);
    }
}

#[test]
fn encode_matches_all_vectors() {
    for v in load_vectors() {
        let delta = encode(&v.input, &v.seed).unwrap();
        assert_eq!(delta, v.expected, "vector {}", v.name);
    }
}

#[test]
fn encode_into_shared_buffer_concatenates_vectors() {
    let vectors = load_vectors();
    let mut out = Vec::new();
    let mut expected = Vec::new();
    for v in &vectors {
        encode_into(&v.input, &v.seed, &mut out).unwrap();
        expected.extend_from_slice(&v.expected);
    }
    assert_eq!(out, expected);
}

#[test]
fn mismatched_lengths_are_rejected() {
    let cases: &[(usize, usize)] = &[(2, 1), (1, 2), (0, 1), (1, 0), (100, 99)];
    for &(input_len, seed_len) in cases {
        let input = vec![0u8; input_len];
        let seed = vec![1u8; seed_len];
        assert_eq!(
            encode(&input, &seed),
            Err(EncodeError::LengthMismatch {
                input: input_len,
                seed: seed_len,
            })
        );
    }
}
