use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A small built-in network with its known reduction result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub name: &'static str,
    pub input: &'static str,
    pub expected: usize,
}

const SAMPLES_DATA: &[Sample] = &[
    Sample {
        name: "fork",
        input: "3 2\n1 2\n1 3\n",
        expected: 0,
    },
    Sample {
        name: "kite",
        input: "5 5\n1 2\n2 3\n3 4\n4 1\n1 5\n",
        expected: 0,
    },
    Sample {
        name: "twin-triangles",
        input: "6 6\n1 2\n2 3\n3 1\n4 5\n5 6\n6 4\n",
        expected: 6,
    },
    Sample {
        name: "twin-forks",
        input: "4 3\n1 2\n1 3\n2 4\n",
        expected: 2,
    },
];

pub fn all_samples() -> &'static [Sample] {
    SAMPLES_DATA
}

static SAMPLE_MAP: Lazy<HashMap<&'static str, &'static Sample>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for s in SAMPLES_DATA.iter() {
        m.insert(s.name, s);
    }
    m
});

pub fn get_sample(name: &str) -> Option<&'static Sample> {
    SAMPLE_MAP.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RoadList;
    use crate::reduce::reduce;

    #[test]
    fn all_samples_contains_expected_entries() {
        let names: Vec<&str> = all_samples().iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["fork", "kite", "twin-triangles", "twin-forks"]);
    }

    #[test]
    fn get_sample_returns_expected() {
        let s = get_sample("twin-triangles").expect("twin-triangles should exist");
        assert_eq!(s.expected, 6);
        assert!(get_sample("unknown").is_none());
    }

    #[test]
    fn samples_reduce_to_expected() {
        for sample in all_samples() {
            let network = RoadList::parse(sample.input)
                .unwrap_or_else(|e| panic!("{}: {}", sample.name, e))
                .build();
            assert_eq!(reduce(&network), Ok(sample.expected), "sample {}", sample.name);
        }
    }
}
