//! Built-in component and architecture defaults
//!
//! Stand-in for the framework's architecture registry: enough metadata to
//! auto-fill configs without instantiating real models. Each trainable
//! factory maps to the section tree a freshly created component would carry,
//! and each architecture maps to the default values of its optional
//! parameters.

use crate::config::{Config, Table, Value};

/// All factories the quickstart generator and auto-fill know about.
pub const KNOWN_FACTORIES: &[&str] = &[
    "tok2vec",
    "transformer",
    "tagger",
    "morphologizer",
    "senter",
    "parser",
    "ner",
    "spancat",
    "textcat",
    "textcat_multilabel",
    "lemmatizer",
    "entity_linker",
];

pub fn known_factory(factory: &str) -> bool {
    KNOWN_FACTORIES.contains(&factory)
}

/// Default section tree for a component named `name` built from `factory`,
/// or `None` when the factory is unknown.
pub fn factory_defaults(factory: &str, name: &str) -> Option<Config> {
    let mut cfg = Config::new();
    let base = format!("components.{name}");
    match factory {
        "tok2vec" => {
            cfg.insert_section(&base, table([("factory", Value::string("tok2vec"))]));
            cfg.insert_section(
                format!("{base}.model"),
                table([("@architectures", Value::string("palabra.Tok2Vec.v1"))]),
            );
            cfg.insert_section(
                format!("{base}.model.embed"),
                table([
                    ("@architectures", Value::string("palabra.MultiHashEmbed.v1")),
                    ("width", Value::interp(&format!("{base}.model.encode.width"))),
                    (
                        "attrs",
                        Value::List(vec![
                            Value::string("NORM"),
                            Value::string("PREFIX"),
                            Value::string("SUFFIX"),
                            Value::string("SHAPE"),
                        ]),
                    ),
                    (
                        "rows",
                        Value::List(vec![
                            Value::Int(5000),
                            Value::Int(1000),
                            Value::Int(2500),
                            Value::Int(2500),
                        ]),
                    ),
                    ("include_static_vectors", Value::Bool(false)),
                ]),
            );
            cfg.insert_section(
                format!("{base}.model.encode"),
                table([
                    (
                        "@architectures",
                        Value::string("palabra.MaxoutWindowEncoder.v1"),
                    ),
                    ("width", Value::Int(96)),
                    ("depth", Value::Int(4)),
                    ("window_size", Value::Int(1)),
                    ("maxout_pieces", Value::Int(3)),
                ]),
            );
        }
        "transformer" => {
            cfg.insert_section(
                &base,
                table([
                    ("factory", Value::string("transformer")),
                    ("max_batch_items", Value::Int(4096)),
                    ("set_extra_annotations", Value::Null),
                ]),
            );
            cfg.insert_section(
                format!("{base}.model"),
                table([
                    (
                        "@architectures",
                        Value::string("palabra.TransformerModel.v1"),
                    ),
                    ("name", Value::string("roberta-base")),
                ]),
            );
            cfg.insert_section(
                format!("{base}.model.get_spans"),
                table([
                    ("@span_getters", Value::string("palabra.strided_spans.v1")),
                    ("window", Value::Int(128)),
                    ("stride", Value::Int(96)),
                ]),
            );
        }
        "tagger" | "morphologizer" | "senter" => {
            let factory_table = match factory {
                "tagger" => table([
                    ("factory", Value::string("tagger")),
                    ("overwrite", Value::Bool(false)),
                    ("neg_prefix", Value::string("!")),
                ]),
                "morphologizer" => table([
                    ("factory", Value::string("morphologizer")),
                    ("overwrite", Value::Bool(true)),
                    ("extend", Value::Bool(false)),
                ]),
                _ => table([
                    ("factory", Value::string("senter")),
                    ("overwrite", Value::Bool(false)),
                ]),
            };
            cfg.insert_section(&base, factory_table);
            cfg.insert_section(
                format!("{base}.model"),
                table([
                    ("@architectures", Value::string("palabra.Tagger.v1")),
                    ("nO", Value::Null),
                    ("normalize", Value::Bool(false)),
                ]),
            );
            cfg.insert_section(format!("{base}.model.tok2vec"), hash_embed_cnn());
        }
        "parser" | "ner" => {
            let (factory_table, state_type, hidden_width, maxout_pieces) = if factory == "parser" {
                (
                    table([
                        ("factory", Value::string("parser")),
                        ("learn_tokens", Value::Bool(false)),
                        ("min_action_freq", Value::Int(30)),
                        ("update_with_oracle_cut_size", Value::Int(100)),
                    ]),
                    "parser",
                    128,
                    3,
                )
            } else {
                (
                    table([
                        ("factory", Value::string("ner")),
                        ("incorrect_spans_key", Value::Null),
                        ("update_with_oracle_cut_size", Value::Int(100)),
                    ]),
                    "ner",
                    64,
                    2,
                )
            };
            cfg.insert_section(&base, factory_table);
            cfg.insert_section(
                format!("{base}.model"),
                table([
                    (
                        "@architectures",
                        Value::string("palabra.TransitionBasedParser.v1"),
                    ),
                    ("state_type", Value::string(state_type)),
                    ("extra_state_tokens", Value::Bool(false)),
                    ("hidden_width", Value::Int(hidden_width)),
                    ("maxout_pieces", Value::Int(maxout_pieces)),
                    ("use_upper", Value::Bool(true)),
                    ("nO", Value::Null),
                ]),
            );
            cfg.insert_section(format!("{base}.model.tok2vec"), hash_embed_cnn());
        }
        "spancat" => {
            cfg.insert_section(
                &base,
                table([
                    ("factory", Value::string("spancat")),
                    ("spans_key", Value::string("sc")),
                    ("threshold", Value::Float(0.5)),
                    ("max_positive", Value::Null),
                ]),
            );
            cfg.insert_section(
                format!("{base}.model"),
                table([(
                    "@architectures",
                    Value::string("palabra.SpanCategorizer.v1"),
                )]),
            );
            cfg.insert_section(
                format!("{base}.model.reducer"),
                table([
                    ("@layers", Value::string("palabra.mean_max_reducer.v1")),
                    ("hidden_size", Value::Int(128)),
                ]),
            );
            cfg.insert_section(
                format!("{base}.model.scorer"),
                table([
                    ("@layers", Value::string("palabra.LinearLogistic.v1")),
                    ("nO", Value::Null),
                    ("nI", Value::Null),
                ]),
            );
            cfg.insert_section(format!("{base}.model.tok2vec"), hash_embed_cnn());
            cfg.insert_section(
                format!("{base}.suggester"),
                table([
                    ("@misc", Value::string("palabra.ngram_suggester.v1")),
                    (
                        "sizes",
                        Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
                    ),
                ]),
            );
        }
        "textcat" | "textcat_multilabel" => {
            let exclusive = factory == "textcat";
            cfg.insert_section(
                &base,
                table([
                    ("factory", Value::string(factory)),
                    (
                        "threshold",
                        Value::Float(if exclusive { 0.0 } else { 0.5 }),
                    ),
                ]),
            );
            cfg.insert_section(
                format!("{base}.model"),
                table([
                    ("@architectures", Value::string("palabra.TextCatBOW.v1")),
                    ("exclusive_classes", Value::Bool(exclusive)),
                    ("ngram_size", Value::Int(1)),
                    ("no_output_layer", Value::Bool(false)),
                    ("nO", Value::Null),
                ]),
            );
        }
        "lemmatizer" => {
            // Rule lemmatizer, no trainable model
            cfg.insert_section(
                &base,
                table([
                    ("factory", Value::string("lemmatizer")),
                    ("mode", Value::string("lookup")),
                    ("overwrite", Value::Bool(false)),
                ]),
            );
        }
        "entity_linker" => {
            cfg.insert_section(
                &base,
                table([
                    ("factory", Value::string("entity_linker")),
                    ("entity_vector_length", Value::Int(64)),
                    ("incl_context", Value::Bool(true)),
                    ("incl_prior", Value::Bool(true)),
                ]),
            );
            cfg.insert_section(
                format!("{base}.model"),
                table([
                    ("@architectures", Value::string("palabra.EntityLinker.v1")),
                    ("nO", Value::Null),
                ]),
            );
            cfg.insert_section(format!("{base}.model.tok2vec"), hash_embed_cnn());
        }
        _ => return None,
    }
    Some(cfg)
}

/// Default values for the optional parameters of a registered architecture.
/// Required parameters (widths, names) have no entry and must come from the
/// config itself.
pub(crate) fn arch_defaults(arch: &str) -> Option<Table> {
    let defaults = match arch {
        "palabra.HashEmbedCNN.v1" => hash_embed_cnn_params(),
        "palabra.MultiHashEmbed.v1" => table([("include_static_vectors", Value::Bool(false))]),
        "palabra.MaxoutWindowEncoder.v1" => table([
            ("window_size", Value::Int(1)),
            ("maxout_pieces", Value::Int(3)),
        ]),
        "palabra.Tok2VecListener.v1" => table([
            (
                "width",
                Value::interp("components.tok2vec.model.encode.width"),
            ),
            ("upstream", Value::string("*")),
        ]),
        "palabra.TransformerListener.v1" => table([
            ("grad_factor", Value::Float(1.0)),
            ("upstream", Value::string("*")),
        ]),
        "palabra.Tagger.v1" => table([("nO", Value::Null), ("normalize", Value::Bool(false))]),
        "palabra.TransitionBasedParser.v1" => table([
            ("extra_state_tokens", Value::Bool(false)),
            ("maxout_pieces", Value::Int(2)),
            ("use_upper", Value::Bool(true)),
            ("nO", Value::Null),
        ]),
        "palabra.TextCatBOW.v1" => table([
            ("ngram_size", Value::Int(1)),
            ("no_output_layer", Value::Bool(false)),
            ("nO", Value::Null),
        ]),
        "palabra.TextCatEnsemble.v1" => table([("nO", Value::Null)]),
        "palabra.strided_spans.v1" => table([
            ("window", Value::Int(128)),
            ("stride", Value::Int(96)),
        ]),
        "palabra.batch_by_words.v1" => table([
            ("discard_oversize", Value::Bool(false)),
            ("tolerance", Value::Float(0.2)),
            ("get_length", Value::Null),
        ]),
        "palabra.batch_by_padded.v1" => table([("get_length", Value::Null)]),
        "palabra.compounding.v1" => table([("t", Value::Float(0.0))]),
        "palabra.Corpus.v1" => table([
            ("max_length", Value::Int(0)),
            ("gold_preproc", Value::Bool(false)),
            ("limit", Value::Int(0)),
            ("augmenter", Value::Null),
        ]),
        "palabra.Adam.v1" => table([
            ("beta1", Value::Float(0.9)),
            ("beta2", Value::Float(0.999)),
            ("L2_is_weight_decay", Value::Bool(true)),
            ("L2", Value::Float(0.01)),
            ("grad_clip", Value::Float(1.0)),
            ("use_averages", Value::Bool(false)),
            ("eps", Value::Float(0.00000001)),
            ("learn_rate", Value::Float(0.001)),
        ]),
        _ => return None,
    };
    Some(defaults)
}

/// Standalone embedding model used by components that do not share a
/// pipeline-level tok2vec.
fn hash_embed_cnn() -> Table {
    let mut t = table([(
        "@architectures",
        Value::string("palabra.HashEmbedCNN.v1"),
    )]);
    t.extend(hash_embed_cnn_params());
    t
}

fn hash_embed_cnn_params() -> Table {
    table([
        ("width", Value::Int(96)),
        ("depth", Value::Int(4)),
        ("embed_size", Value::Int(2000)),
        ("window_size", Value::Int(1)),
        ("maxout_pieces", Value::Int(3)),
        ("subword_features", Value::Bool(true)),
        ("pretrained_vectors", Value::Null),
    ])
}

fn table<const N: usize>(pairs: [(&str, Value); N]) -> Table {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_factory_has_defaults() {
        for factory in KNOWN_FACTORIES {
            let cfg = factory_defaults(factory, "x").unwrap();
            let component = cfg.section("components.x").unwrap();
            assert_eq!(
                component.get("factory").and_then(Value::as_str),
                Some(*factory)
            );
        }
    }

    #[test]
    fn test_unknown_factory_has_none() {
        assert!(factory_defaults("coref", "coref").is_none());
        assert!(!known_factory("coref"));
    }

    #[test]
    fn test_parser_and_ner_differ_in_widths() {
        let parser = factory_defaults("parser", "parser").unwrap();
        let ner = factory_defaults("ner", "ner").unwrap();
        assert_eq!(
            parser.get("components.parser.model", "hidden_width"),
            Some(&Value::Int(128))
        );
        assert_eq!(
            ner.get("components.ner.model", "hidden_width"),
            Some(&Value::Int(64))
        );
    }

    #[test]
    fn test_arch_defaults_known_and_unknown() {
        assert!(arch_defaults("palabra.Adam.v1").is_some());
        assert!(arch_defaults("palabra.Tok2Vec.v1").is_none());
        assert!(arch_defaults("my_custom.Arch.v1").is_none());
    }

    #[test]
    fn test_lemmatizer_has_no_model() {
        let cfg = factory_defaults("lemmatizer", "lemmatizer").unwrap();
        assert!(cfg.section("components.lemmatizer").is_some());
        assert!(cfg.section("components.lemmatizer.model").is_none());
    }
}
