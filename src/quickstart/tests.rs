use super::template::collapse_blank_lines;
use super::*;
use crate::config::Value;
use crate::recommend::{TrfEntry, TrfRecommendations};

fn trf_reco() -> TrfRecommendations {
    TrfRecommendations {
        efficiency: TrfEntry {
            name: "distilbert-base-uncased".to_string(),
            size_factor: 3.0,
        },
        accuracy: TrfEntry {
            name: "roberta-base".to_string(),
            size_factor: 3.0,
        },
    }
}

#[test]
fn test_init_config_defaults() {
    let config = init_config(&InitOptions::default()).unwrap();
    assert_eq!(
        config.get("nlp", "lang").and_then(Value::as_str),
        Some("en")
    );
    assert_eq!(
        config.pipeline(),
        vec!["tok2vec", "tagger", "parser", "ner"]
    );
    // Efficiency hyperparameters
    assert_eq!(
        config.get("components.tok2vec.model.encode", "width"),
        Some(&Value::Int(96))
    );
    assert_eq!(
        config.get("components.tok2vec.model.encode", "depth"),
        Some(&Value::Int(4))
    );
    // Complete config: the base skeleton was filled in
    assert!(config.contains_section("training.optimizer"));
    assert!(config.contains_section("initialize"));
}

#[test]
fn test_init_config_accuracy_widens_encoder() {
    let opts = InitOptions {
        optimize: Optimize::Accuracy,
        ..InitOptions::default()
    };
    let config = init_config(&opts).unwrap();
    assert_eq!(
        config.get("components.tok2vec.model.encode", "width"),
        Some(&Value::Int(256))
    );
    assert_eq!(
        config.get("components.tok2vec.model.encode", "depth"),
        Some(&Value::Int(8))
    );
    // Accuracy on CPU pulls in the recommended word vectors
    assert_eq!(
        config.get("paths", "vectors").and_then(Value::as_str),
        Some("en_vectors_lg")
    );
    assert_eq!(
        config.get("components.tok2vec.model.embed", "include_static_vectors"),
        Some(&Value::Bool(true))
    );
}

#[test]
fn test_init_config_no_pretraining_block_by_default() {
    let config = init_config(&InitOptions::default()).unwrap();
    assert!(!config.contains_section("pretraining"));
}

#[test]
fn test_init_config_pretraining_block() {
    let opts = InitOptions {
        pretraining: true,
        ..InitOptions::default()
    };
    let config = init_config(&opts).unwrap();
    assert!(config.contains_section("pretraining"));
    assert_eq!(
        config.get("pretraining", "component").and_then(Value::as_str),
        Some("tok2vec")
    );
}

#[test]
fn test_init_config_pretraining_without_tok2vec_still_valid() {
    // Pretraining without a tok2vec component warns but must not fail
    let opts = InitOptions {
        pipeline: vec!["lemmatizer".to_string()],
        pretraining: true,
        ..InitOptions::default()
    };
    let config = init_config(&opts).unwrap();
    assert!(config.contains_section("pretraining"));
    assert_eq!(config.pipeline(), vec!["tok2vec", "lemmatizer"]);
}

#[test]
fn test_init_config_rejects_renamed_language_code() {
    let opts = InitOptions {
        lang: "xx".to_string(),
        ..InitOptions::default()
    };
    let err = init_config(&opts).unwrap_err();
    assert!(err.to_string().contains("mul"));

    let opts = InitOptions {
        lang: "is".to_string(),
        ..InitOptions::default()
    };
    let err = init_config(&opts).unwrap_err();
    assert!(err.to_string().contains("isl"));
}

#[test]
fn test_init_config_unknown_language_uses_defaults() {
    let opts = InitOptions {
        lang: "yo".to_string(),
        pipeline: vec!["ner".to_string()],
        ..InitOptions::default()
    };
    let config = init_config(&opts).unwrap();
    assert_eq!(
        config.get("nlp", "lang").and_then(Value::as_str),
        Some("yo")
    );
    assert_eq!(config.pipeline(), vec!["tok2vec", "ner"]);
}

#[test]
fn test_init_config_filters_explicit_tok2vec() {
    let opts = InitOptions {
        pipeline: vec!["tok2vec".to_string(), "tagger".to_string()],
        ..InitOptions::default()
    };
    let config = init_config(&opts).unwrap();
    assert_eq!(config.pipeline(), vec!["tok2vec", "tagger"]);
}

#[test]
fn test_init_config_no_letters_script_drops_prefix_suffix() {
    let opts = InitOptions {
        lang: "zh".to_string(),
        pipeline: vec!["tagger".to_string()],
        ..InitOptions::default()
    };
    let config = init_config(&opts).unwrap();
    let attrs = config
        .get("components.tok2vec.model.embed", "attrs")
        .and_then(Value::as_string_list)
        .unwrap();
    assert_eq!(attrs, vec!["NORM", "SHAPE"]);
}

#[test]
fn test_render_transformer_config() {
    let trf = trf_reco();
    let vars = QuickstartVars {
        lang: "en",
        components: vec!["ner"],
        optimize: Optimize::Accuracy,
        gpu: true,
        transformer: Some(&trf),
        word_vectors: Some("en_vectors_lg"),
        has_letters: true,
    };
    assert_eq!(vars.transformer_name(), Some("roberta-base"));
    let text = render(&vars);
    assert!(text.contains("pipeline = [\"transformer\",\"ner\"]"));
    assert!(text.contains("name = \"roberta-base\""));
    assert!(text.contains("palabra.TransformerListener.v1"));
    assert!(text.contains("palabra.warmup_linear.v1"));
    assert!(text.contains("gpu_allocator = \"pytorch\""));
    // Transformer embeddings replace static vectors
    assert!(text.contains("vectors = null"));
}

#[test]
fn test_render_transformer_efficiency_model() {
    let trf = trf_reco();
    let vars = QuickstartVars {
        lang: "en",
        components: vec!["tagger"],
        optimize: Optimize::Efficiency,
        gpu: true,
        transformer: Some(&trf),
        word_vectors: None,
        has_letters: true,
    };
    assert_eq!(vars.transformer_name(), Some("distilbert-base-uncased"));
}

#[test]
fn test_render_cpu_ignores_transformer() {
    let trf = trf_reco();
    let vars = QuickstartVars {
        lang: "en",
        components: vec!["tagger"],
        optimize: Optimize::Efficiency,
        gpu: false,
        transformer: Some(&trf),
        word_vectors: None,
        has_letters: true,
    };
    assert!(!vars.use_transformer());
    assert_eq!(vars.transformer_name(), None);
    let text = render(&vars);
    assert!(text.contains("palabra.Tok2Vec.v1"));
    assert!(!text.contains("transformer"));
}

#[test]
fn test_rendered_config_parses_and_validates() {
    let vars = QuickstartVars {
        lang: "de",
        components: vec!["tagger", "parser", "ner"],
        optimize: Optimize::Efficiency,
        gpu: false,
        transformer: None,
        word_vectors: None,
        has_letters: true,
    };
    let config: Config = render(&vars).parse().unwrap();
    let filled = crate::registry::auto_fill(&config).unwrap();
    assert!(crate::registry::validate(&filled).is_ok());
}

#[test]
fn test_optimize_from_str() {
    assert_eq!("efficiency".parse::<Optimize>(), Ok(Optimize::Efficiency));
    assert_eq!("Accuracy".parse::<Optimize>(), Ok(Optimize::Accuracy));
    assert!("speed".parse::<Optimize>().is_err());
}

#[test]
fn test_collapse_blank_lines() {
    assert_eq!(collapse_blank_lines("a\n\n\n\nb"), "a\n\nb");
    assert_eq!(collapse_blank_lines("a\n\nb"), "a\n\nb");
    assert_eq!(collapse_blank_lines("a\nb"), "a\nb");
}

#[test]
fn test_is_stdout() {
    use std::path::Path;
    assert!(is_stdout(Path::new("-")));
    assert!(!is_stdout(Path::new("config.cfg")));
}

#[test]
fn test_fill_config_no_op_on_complete_config() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.cfg");
    let out = dir.path().join("filled.cfg");
    let opts = InitOptions::default();
    let complete = init_config(&opts).unwrap();
    complete.to_path(&base).unwrap();
    let fill_opts = FillOptions {
        silent: true,
        ..FillOptions::default()
    };
    let (_, filled) = fill_config(&out, &base, &fill_opts).unwrap();
    assert_eq!(complete.to_string(), filled.to_string());
    assert_eq!(std::fs::read_to_string(&out).unwrap(), complete.to_string());
}

#[test]
fn test_fill_config_preserves_sourced_components() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.cfg");
    let out = dir.path().join("filled.cfg");
    std::fs::write(
        &base,
        r#"
[nlp]
lang = "en"
pipeline = ["ner", "tagger"]

[components.ner]
source = "en_pipeline_sm"

[components.tagger]
factory = "tagger"
"#,
    )
    .unwrap();
    let fill_opts = FillOptions {
        silent: true,
        ..FillOptions::default()
    };
    let (_, filled) = fill_config(&out, &base, &fill_opts).unwrap();
    let ner = filled.section("components.ner").unwrap();
    assert_eq!(ner.len(), 1);
    assert_eq!(
        ner.get("source").and_then(Value::as_str),
        Some("en_pipeline_sm")
    );
    // The inline component still got its defaults
    assert!(filled.contains_section("components.tagger.model"));
}

#[test]
fn test_fill_config_distillation_block() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.cfg");
    let out = dir.path().join("filled.cfg");
    std::fs::write(
        &base,
        "[nlp]\nlang = \"en\"\npipeline = [\"tagger\"]\n\n[components.tagger]\nfactory = \"tagger\"\n",
    )
    .unwrap();
    let fill_opts = FillOptions {
        distillation: true,
        silent: true,
        ..FillOptions::default()
    };
    let (_, filled) = fill_config(&out, &base, &fill_opts).unwrap();
    assert!(filled.contains_section("distillation"));
    assert!(filled.contains_section("corpora.distillation"));
}

#[test]
fn test_fill_config_rejects_invalid_base() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.cfg");
    let out = dir.path().join("filled.cfg");
    std::fs::write(&base, "[components.custom]\nfactory = \"my_factory\"\n").unwrap();
    let fill_opts = FillOptions {
        silent: true,
        ..FillOptions::default()
    };
    assert!(fill_config(&out, &base, &fill_opts).is_err());
    assert!(!out.exists());
}

#[test]
fn test_save_config_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested/deep/config.cfg");
    let config = init_config(&InitOptions::default()).unwrap();
    save_config(&config, &out, true).unwrap();
    assert!(out.exists());
}
