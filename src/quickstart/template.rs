//! Quickstart template rendering
//!
//! Structured builder for the starter config text. The output is parsed and
//! auto-filled afterwards, so only the settings that depend on the chosen
//! use case are rendered here; everything else comes from the defaults.

use super::Optimize;
use crate::recommend::TrfRecommendations;

/// Substitution variables resolved from the CLI options and the language
/// recommendation.
#[derive(Debug, Clone)]
pub struct QuickstartVars<'a> {
    pub lang: &'a str,
    /// User components, without the framework-managed tok2vec/transformer.
    pub components: Vec<&'a str>,
    pub optimize: Optimize,
    pub gpu: bool,
    pub transformer: Option<&'a TrfRecommendations>,
    pub word_vectors: Option<&'a str>,
    pub has_letters: bool,
}

impl QuickstartVars<'_> {
    /// Transformer embeddings are only worth it on GPU.
    pub fn use_transformer(&self) -> bool {
        self.gpu && self.transformer.is_some()
    }

    /// Name of the selected pretrained transformer, if one is used.
    pub fn transformer_name(&self) -> Option<&str> {
        if !self.use_transformer() {
            return None;
        }
        self.transformer.map(|trf| match self.optimize {
            Optimize::Efficiency => trf.efficiency.name.as_str(),
            Optimize::Accuracy => trf.accuracy.name.as_str(),
        })
    }
}

/// Render the quickstart config text for the given variables.
pub fn render(vars: &QuickstartVars) -> String {
    let accuracy = vars.optimize == Optimize::Accuracy;
    let trf = vars.use_transformer();
    let mut out = String::new();

    let vectors = match vars.word_vectors {
        Some(name) if accuracy && !trf => format!("\"{name}\""),
        _ => "null".to_string(),
    };
    let gpu_allocator = if trf { "\"pytorch\"" } else { "null" };
    let batch_size = if trf { 128 } else { 1000 };

    let mut pipe_names = vec![if trf { "transformer" } else { "tok2vec" }];
    pipe_names.extend(&vars.components);
    let pipeline = format!("[\"{}\"]", pipe_names.join("\",\""));

    out.push_str(&format!(
        "[paths]\n\
         train = null\n\
         dev = null\n\
         vectors = {vectors}\n\
         init_tok2vec = null\n\n\
         [system]\n\
         gpu_allocator = {gpu_allocator}\n\
         seed = 0\n\n\
         [nlp]\n\
         lang = \"{lang}\"\n\
         pipeline = {pipeline}\n\
         batch_size = {batch_size}\n\n\
         [components]\n\n",
        lang = vars.lang,
    ));

    if trf {
        push_transformer(&mut out, vars);
    } else {
        push_tok2vec(&mut out, vars);
    }
    for name in &vars.components {
        push_component(&mut out, name, vars);
    }
    push_training(&mut out, trf);

    collapse_blank_lines(out.trim())
}

fn push_transformer(out: &mut String, vars: &QuickstartVars) {
    let name = vars.transformer_name().unwrap_or("roberta-base");
    let stride = if vars.optimize == Optimize::Accuracy {
        128
    } else {
        96
    };
    out.push_str(&format!(
        "[components.transformer]\n\
         factory = \"transformer\"\n\
         max_batch_items = 4096\n\n\
         [components.transformer.model]\n\
         @architectures = \"palabra.TransformerModel.v1\"\n\
         name = \"{name}\"\n\n\
         [components.transformer.model.get_spans]\n\
         @span_getters = \"palabra.strided_spans.v1\"\n\
         window = 128\n\
         stride = {stride}\n\n",
    ));
}

fn push_tok2vec(out: &mut String, vars: &QuickstartVars) {
    let accuracy = vars.optimize == Optimize::Accuracy;
    let width = if accuracy { 256 } else { 96 };
    let depth = if accuracy { 8 } else { 4 };
    let (attrs, rows) = if vars.has_letters {
        (
            "[\"NORM\",\"PREFIX\",\"SUFFIX\",\"SHAPE\"]",
            "[5000,1000,2500,2500]",
        )
    } else {
        ("[\"NORM\",\"SHAPE\"]", "[5000,2500]")
    };
    let include_static_vectors = accuracy && vars.word_vectors.is_some();
    out.push_str(&format!(
        "[components.tok2vec]\n\
         factory = \"tok2vec\"\n\n\
         [components.tok2vec.model]\n\
         @architectures = \"palabra.Tok2Vec.v1\"\n\n\
         [components.tok2vec.model.embed]\n\
         @architectures = \"palabra.MultiHashEmbed.v1\"\n\
         width = ${{components.tok2vec.model.encode.width}}\n\
         attrs = {attrs}\n\
         rows = {rows}\n\
         include_static_vectors = {include_static_vectors}\n\n\
         [components.tok2vec.model.encode]\n\
         @architectures = \"palabra.MaxoutWindowEncoder.v1\"\n\
         width = {width}\n\
         depth = {depth}\n\
         window_size = 1\n\
         maxout_pieces = 3\n\n",
    ));
}

fn push_listener(out: &mut String, name: &str, trf: bool) {
    if trf {
        out.push_str(&format!(
            "[components.{name}.model.tok2vec]\n\
             @architectures = \"palabra.TransformerListener.v1\"\n\
             grad_factor = 1.0\n\
             upstream = \"*\"\n\n\
             [components.{name}.model.tok2vec.pooling]\n\
             @layers = \"palabra.reduce_mean.v1\"\n\n",
        ));
    } else {
        out.push_str(&format!(
            "[components.{name}.model.tok2vec]\n\
             @architectures = \"palabra.Tok2VecListener.v1\"\n\
             width = ${{components.tok2vec.model.encode.width}}\n\
             upstream = \"*\"\n\n",
        ));
    }
}

fn push_component(out: &mut String, name: &str, vars: &QuickstartVars) {
    let trf = vars.use_transformer();
    match name {
        "tagger" | "morphologizer" | "senter" => {
            out.push_str(&format!(
                "[components.{name}]\n\
                 factory = \"{name}\"\n\n\
                 [components.{name}.model]\n\
                 @architectures = \"palabra.Tagger.v1\"\n\
                 nO = null\n\n",
            ));
            push_listener(out, name, trf);
        }
        "parser" | "ner" => {
            let (hidden_width, maxout_pieces) = if name == "parser" { (128, 3) } else { (64, 2) };
            out.push_str(&format!(
                "[components.{name}]\n\
                 factory = \"{name}\"\n\n\
                 [components.{name}.model]\n\
                 @architectures = \"palabra.TransitionBasedParser.v1\"\n\
                 state_type = \"{name}\"\n\
                 extra_state_tokens = false\n\
                 hidden_width = {hidden_width}\n\
                 maxout_pieces = {maxout_pieces}\n\
                 use_upper = true\n\
                 nO = null\n\n",
            ));
            push_listener(out, name, trf);
        }
        "spancat" => {
            out.push_str(
                "[components.spancat]\n\
                 factory = \"spancat\"\n\
                 spans_key = \"sc\"\n\
                 threshold = 0.5\n\
                 max_positive = null\n\n\
                 [components.spancat.model]\n\
                 @architectures = \"palabra.SpanCategorizer.v1\"\n\n\
                 [components.spancat.model.reducer]\n\
                 @layers = \"palabra.mean_max_reducer.v1\"\n\
                 hidden_size = 128\n\n\
                 [components.spancat.model.scorer]\n\
                 @layers = \"palabra.LinearLogistic.v1\"\n\
                 nO = null\n\
                 nI = null\n\n",
            );
            push_listener(out, "spancat", trf);
            out.push_str(
                "[components.spancat.suggester]\n\
                 @misc = \"palabra.ngram_suggester.v1\"\n\
                 sizes = [1,2,3]\n\n",
            );
        }
        "textcat" | "textcat_multilabel" => {
            push_textcat(out, name, vars);
        }
        "lemmatizer" => {
            out.push_str(
                "[components.lemmatizer]\n\
                 factory = \"lemmatizer\"\n\n",
            );
        }
        "entity_linker" => {
            out.push_str(
                "[components.entity_linker]\n\
                 factory = \"entity_linker\"\n\n\
                 [components.entity_linker.model]\n\
                 @architectures = \"palabra.EntityLinker.v1\"\n\
                 nO = null\n\n",
            );
            push_listener(out, "entity_linker", trf);
        }
        other => {
            // Unknown components get a bare factory block; auto-fill decides
            // whether the factory actually exists
            out.push_str(&format!(
                "[components.{other}]\n\
                 factory = \"{other}\"\n\n",
            ));
        }
    }
}

fn push_textcat(out: &mut String, name: &str, vars: &QuickstartVars) {
    let exclusive = name == "textcat";
    if vars.optimize == Optimize::Accuracy {
        out.push_str(&format!(
            "[components.{name}]\n\
             factory = \"{name}\"\n\n\
             [components.{name}.model]\n\
             @architectures = \"palabra.TextCatEnsemble.v1\"\n\
             nO = null\n\n",
        ));
        push_listener(out, name, vars.use_transformer());
        out.push_str(&format!(
            "[components.{name}.model.linear_model]\n\
             @architectures = \"palabra.TextCatBOW.v1\"\n\
             exclusive_classes = {exclusive}\n\
             ngram_size = 1\n\
             no_output_layer = false\n\
             nO = null\n\n",
        ));
    } else {
        out.push_str(&format!(
            "[components.{name}]\n\
             factory = \"{name}\"\n\n\
             [components.{name}.model]\n\
             @architectures = \"palabra.TextCatBOW.v1\"\n\
             exclusive_classes = {exclusive}\n\
             ngram_size = 1\n\
             no_output_layer = false\n\
             nO = null\n\n",
        ));
    }
}

fn push_training(out: &mut String, trf: bool) {
    let max_length = if trf { 500 } else { 0 };
    out.push_str(&format!(
        "[corpora]\n\n\
         [corpora.train]\n\
         @readers = \"palabra.Corpus.v1\"\n\
         path = ${{paths.train}}\n\
         max_length = {max_length}\n\n\
         [corpora.dev]\n\
         @readers = \"palabra.Corpus.v1\"\n\
         path = ${{paths.dev}}\n\
         max_length = 0\n\n\
         [training]\n\
         dev_corpus = \"corpora.dev\"\n\
         train_corpus = \"corpora.train\"\n",
    ));
    if trf {
        out.push_str(
            "accumulate_gradient = 3\n\n\
             [training.optimizer]\n\
             @optimizers = \"palabra.Adam.v1\"\n\n\
             [training.optimizer.learn_rate]\n\
             @schedules = \"palabra.warmup_linear.v1\"\n\
             warmup_steps = 250\n\
             total_steps = 20000\n\
             initial_rate = 0.00005\n\n\
             [training.batcher]\n\
             @batchers = \"palabra.batch_by_padded.v1\"\n\
             discard_oversize = true\n\
             size = 2000\n\
             buffer = 256\n\n",
        );
    } else {
        out.push_str(
            "\n[training.optimizer]\n\
             @optimizers = \"palabra.Adam.v1\"\n\n\
             [training.batcher]\n\
             @batchers = \"palabra.batch_by_words.v1\"\n\
             discard_oversize = false\n\
             tolerance = 0.2\n\n\
             [training.batcher.size]\n\
             @schedules = \"palabra.compounding.v1\"\n\
             start = 100\n\
             stop = 1000\n\
             compound = 1.001\n\n",
        );
    }
    out.push_str(
        "[initialize]\n\
         vectors = ${paths.vectors}\n\
         init_tok2vec = ${paths.init_tok2vec}\n",
    );
}

/// Collapse runs of three or more newlines down to one blank line.
pub(crate) fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0usize;
    for c in text.chars() {
        if c == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push(c);
            }
        } else {
            newlines = 0;
            out.push(c);
        }
    }
    out
}
