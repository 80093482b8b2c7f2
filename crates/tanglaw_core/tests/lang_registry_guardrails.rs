use std::collections::HashMap;

use tanglaw_core::lang::keywords;
use tanglaw_core::lang::operators;
use tanglaw_core::lang::punctuation;
use tanglaw_core::lang::reserved;
use tanglaw_core::lang::types;
use tanglaw_core::lang::BOOLEAN_LITERALS;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn data_types_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, types::DataTypeId> = HashMap::new();

    for info in types::DATA_TYPES {
        assert_eq!(types::from_str(info.canonical), Some(info.id));
        assert_eq!(types::as_str(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate data type spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
}

#[test]
fn reserved_words_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, reserved::ReservedWordId> = HashMap::new();

    for info in reserved::RESERVED_WORDS {
        assert_eq!(
            reserved::from_str(info.canonical),
            Some(info.id),
            "reserved word not resolvable: {}",
            info.canonical
        );
        assert_eq!(reserved::as_str(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate reserved word spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(operators::from_str(info.spelling), Some(info.id));
        assert_eq!(operators::as_str(info.id), info.spelling);
        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!("duplicate operator spelling {:?}: {:?} and {:?}", info.spelling, prev, info.id);
        }
    }
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    for info in punctuation::PUNCTUATION {
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        assert_eq!(punctuation::as_str(info.id), info.canonical);
    }
}

/// A word may live in exactly one vocabulary; the lexer's classification priority must never be the thing that
/// decides which registry wins.
#[test]
fn word_vocabularies_are_disjoint() {
    let mut owner: HashMap<&'static str, &'static str> = HashMap::new();
    let mut claim = |spelling: &'static str, registry: &'static str| {
        if let Some(prev) = owner.insert(spelling, registry) {
            panic!("{spelling:?} is claimed by both {prev} and {registry}");
        }
    };

    for info in types::DATA_TYPES {
        claim(info.canonical, "types");
    }
    for (spelling, _) in BOOLEAN_LITERALS {
        claim(spelling, "booleans");
    }
    for info in keywords::KEYWORDS {
        claim(info.canonical, "keywords");
    }
    for info in reserved::RESERVED_WORDS {
        claim(info.canonical, "reserved");
    }
}

#[test]
fn symbol_vocabularies_are_disjoint() {
    for info in punctuation::PUNCTUATION {
        assert_eq!(
            operators::from_str(info.canonical),
            None,
            "{:?} is both punctuation and an operator",
            info.canonical
        );
    }
}

/// Every multi-character operator must be reachable by extending one of its own prefixes, otherwise maximal
/// munch can never produce it.
#[test]
fn compound_operators_are_reachable_by_munch() {
    for info in operators::OPERATORS {
        let sp = info.spelling;
        for end in 2..=sp.len() {
            let prefix = &sp[..end];
            assert!(
                operators::is_compound(prefix),
                "{sp:?} is unreachable: prefix {prefix:?} is not itself an operator"
            );
        }
    }
}
