use anyhow::Context;
use colored::*;

use crate::mprint;
use crate::terminal::{colors, print};
use morse_common::config::Config;
use morse_core::{Translation, Translator};

pub fn encode(text: &[String], cfg: &Config) -> anyhow::Result<()> {
    let input: String = text.join(" ");
    let translator: Translator = load(cfg)?;
    let translation: Translation = translator.encode_text(&input);

    report(&input, &translation, colors::CODE, cfg);
    Ok(())
}

pub fn decode(code: &[String], cfg: &Config) -> anyhow::Result<()> {
    let input: String = code.join(" ");
    let translator: Translator = load(cfg)?;
    let translation: Translation = translator.decode_text(&input);

    report(&input, &translation, colors::SYMBOL, cfg);
    Ok(())
}

/// Loads the configured table. One-shot commands fail on a missing file.
pub fn load(cfg: &Config) -> anyhow::Result<Translator> {
    let path = cfg.definition_or_default();
    let translator: Translator = Translator::load(&path)
        .with_context(|| format!("cannot translate without a definition table ({})", path.display()))?;
    Ok(translator.with_separator(cfg.separator.clone()))
}

fn report(input: &str, translation: &Translation, color: Color, cfg: &Config) {
    if cfg.quiet > 0 {
        mprint!(&translation.output);
    } else {
        print::fields(&[
            ("Input", input.normal()),
            ("Result", translation.output.as_str().color(color).bold()),
        ]);
    }

    print::misses(translation);
}
