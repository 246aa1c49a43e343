//! The closed set of submission languages Kattis accepts, with their
//! canonical source-file extensions.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, EnumVariantNames};

/// A Kattis submission language. Parses case-insensitively from the
/// lowercase names Kattis uses (`"c++"`, `"objective-c"`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumVariantNames,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Apl,
    Bash,
    C,
    #[strum(serialize = "c#")]
    #[serde(rename = "c#")]
    CSharp,
    #[strum(serialize = "c++")]
    #[serde(rename = "c++")]
    Cpp,
    Cobol,
    Lisp,
    Dart,
    #[strum(serialize = "f#")]
    #[serde(rename = "f#")]
    FSharp,
    Fortran,
    Gerbil,
    Go,
    Haskell,
    Java,
    Javascript,
    Spidermonkey,
    Julia,
    Kotlin,
    Ocaml,
    #[strum(serialize = "objective-c")]
    #[serde(rename = "objective-c")]
    ObjectiveC,
    Php,
    Pascal,
    Prolog,
    Python2,
    Python3,
    Python,
    Ruby,
    Rust,
    Typescript,
    #[strum(serialize = "visual-basic")]
    #[serde(rename = "visual-basic")]
    VisualBasic,
}

impl Language {
    /// The file extension for a stub solution in this language, dot included.
    pub fn extension(self) -> &'static str {
        match self {
            Language::Apl => ".apl",
            Language::Bash => ".sh",
            Language::C => ".c",
            Language::CSharp => ".cs",
            Language::Cpp => ".cc",
            Language::Cobol => ".cob",
            Language::Lisp => ".lisp",
            Language::Dart => ".dart",
            Language::FSharp => ".fs",
            Language::Fortran => ".f90",
            Language::Gerbil => ".ss",
            Language::Go => ".go",
            Language::Haskell => ".hs",
            Language::Java => ".java",
            Language::Javascript | Language::Spidermonkey => ".js",
            Language::Julia => ".jl",
            Language::Kotlin => ".kt",
            Language::Ocaml => ".ml",
            Language::ObjectiveC => ".m",
            Language::Php => ".php",
            Language::Pascal => ".pas",
            Language::Prolog => ".pl",
            Language::Python2 | Language::Python3 | Language::Python => ".py",
            Language::Ruby => ".rb",
            Language::Rust => ".rs",
            Language::Typescript => ".ts",
            Language::VisualBasic => ".vb",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::VariantNames;

    #[test]
    fn parses_lowercase_names() {
        assert_eq!("python".parse::<Language>().unwrap(), Language::Python);
        assert_eq!("c++".parse::<Language>().unwrap(), Language::Cpp);
        assert_eq!("c#".parse::<Language>().unwrap(), Language::CSharp);
        assert_eq!(
            "objective-c".parse::<Language>().unwrap(),
            Language::ObjectiveC
        );
        assert_eq!(
            "visual-basic".parse::<Language>().unwrap(),
            Language::VisualBasic
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("RUST".parse::<Language>().unwrap(), Language::Rust);
        assert_eq!("Haskell".parse::<Language>().unwrap(), Language::Haskell);
        assert_eq!("C++".parse::<Language>().unwrap(), Language::Cpp);
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!("cobol85".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
        assert!("brainfuck".parse::<Language>().is_err());
    }

    #[test]
    fn extensions_match_kattis_conventions() {
        assert_eq!(Language::Python3.extension(), ".py");
        assert_eq!(Language::Cpp.extension(), ".cc");
        assert_eq!(Language::Spidermonkey.extension(), ".js");
        assert_eq!(Language::Fortran.extension(), ".f90");
        assert_eq!(Language::Bash.extension(), ".sh");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for name in Language::VARIANTS {
            let lang: Language = name.parse().unwrap();
            assert_eq!(&lang.to_string(), name);
        }
    }

    #[test]
    fn table_covers_all_kattis_languages() {
        assert_eq!(Language::VARIANTS.len(), 30);
    }
}
