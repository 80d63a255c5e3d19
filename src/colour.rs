use clap::ValueEnum;
use is_terminal::IsTerminal;

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Colour {
    #[default]
    Auto,
    Always,
    Never,
}

impl Colour {
    pub fn should_use_colour(&self) -> bool {
        match self {
            Colour::Auto => panic!("Missing call to Colour::detect"),
            Colour::Always => true,
            Colour::Never => false,
        }
    }

    /// Resolves "auto" to either "always" or "never" depending on whether stderr is a terminal,
    /// then sets the colored crate's override to match.
    pub fn detect(self) -> Self {
        let resolved = match self {
            Colour::Auto => {
                if std::io::stderr().is_terminal() {
                    Colour::Always
                } else {
                    Colour::Never
                }
            }
            other => other,
        };
        colored::control::set_override(resolved.should_use_colour());
        resolved
    }
}
