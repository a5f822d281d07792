//! Command line arguments backing the `surtitre` binary.
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "surtitre",
    about = "Overlay on-screen text with its translation, line by line",
    version
)]
pub struct Args {
    /// Language the on-screen text is written in
    #[arg(long, default_value = "en")]
    pub source_lang: String,

    /// Language to translate into
    #[arg(long, default_value = "fr")]
    pub target_lang: String,

    /// Traineddata language passed to the OCR engine
    #[arg(long, default_value = "eng")]
    pub ocr_lang: String,
}
