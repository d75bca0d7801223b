pub mod error;
pub mod frontend;
pub mod settings;
pub mod source;
pub mod source_location;

pub use error::Error;

use error::reporting::ErrorReporter;
use frontend::lexer::Token;
use frontend::parser::ast::Program;
use frontend::type_checker::CheckedProgram;
use frontend::Frontend;
use settings::{Setting, Settings};
use source::{HasOrigin, Registry, SourceId};
use std::io::Read;

pub type Result<T> = std::result::Result<T, Error>;

/// Runs the front end over sources it keeps in its own [`Registry`], so
/// errors can be rendered against the text they came from.
pub struct Compiler {
    frontend: Frontend,
    settings: Settings,
    registry: Registry,
}

impl Compiler {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Compiler {
            frontend: Frontend::new(),
            settings,
            registry: Registry::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn tokenize<T: HasOrigin + Read>(&mut self, source: T) -> Result<Vec<Token>> {
        let (id, text) = self.register(source)?;
        let tokens = self
            .frontend
            .tokenize(&text)
            .map_err(|e| Error::frontend(id, e))?;

        if self.settings.is_enabled(Setting::DumpTokens) {
            for token in &tokens {
                log::info!("{} {} {:?}", token.location, token.kind, token.text);
            }
        }

        Ok(tokens)
    }

    pub fn parse<T: HasOrigin + Read>(&mut self, source: T) -> Result<Program> {
        let (id, text) = self.register(source)?;
        self.parse_registered(id, &text)
    }

    pub fn check<T: HasOrigin + Read>(&mut self, source: T) -> Result<CheckedProgram> {
        let (id, text) = self.register(source)?;
        let program = self.parse_registered(id, &text)?;
        let checked = self
            .frontend
            .check(program)
            .map_err(|e| Error::frontend(id, e))?;

        if self.settings.is_enabled(Setting::DumpTypes) {
            for declaration in checked.annotations.declarations() {
                log::info!(
                    "{} {} : {} ({:?})",
                    declaration.location,
                    declaration.name,
                    declaration.ty,
                    declaration.kind
                );
            }
        }

        Ok(checked)
    }

    /// Render `e` to stderr against the sources of this compiler.
    pub fn report(&self, e: &Error) {
        ErrorReporter::new(&self.registry).report_error(e)
    }

    fn parse_registered(&self, id: SourceId, text: &str) -> Result<Program> {
        let program = self
            .frontend
            .parse(text)
            .map_err(|e| Error::frontend(id, e))?;

        if self.settings.is_enabled(Setting::DumpAst) {
            log::info!("\n{}", program);
        }

        Ok(program)
    }

    fn register<T: HasOrigin + Read>(&mut self, source: T) -> Result<(SourceId, String)> {
        let id = self.registry.add(source)?;
        let text = self.registry.text(id).unwrap_or_default().to_string();

        Ok((id, text))
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::frontend::ErrorKind;
    use crate::compiler::source::{BufferSource, StringSource};

    #[test]
    fn test_check_registers_every_source() {
        let mut compiler = Compiler::new();

        compiler.check(StringSource::new("void p() int x = 1;")).unwrap();
        compiler
            .check(BufferSource::new("int q() ^ 1;", "q"))
            .unwrap();

        let first = compiler.tokenize(StringSource::new("x")).unwrap();
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_errors_carry_their_source() {
        let mut compiler = Compiler::new();
        compiler.check(StringSource::new("void p()")).unwrap();

        match compiler.check(BufferSource::new("void p() ^ y;", "broken")) {
            Err(Error::FrontendError(id, e)) => {
                assert_eq!(e.kind(), ErrorKind::Type);
                assert_eq!(compiler.registry().text(id), Some("void p() ^ y;"));
            }
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_dump_settings_do_not_change_results() {
        let mut settings = Settings::default();
        settings.enable(Setting::DumpTokens);
        settings.enable(Setting::DumpAst);
        settings.enable(Setting::DumpTypes);
        let mut compiler = Compiler::with_settings(settings);

        assert!(compiler.settings().is_enabled(Setting::DumpAst));
        assert!(compiler
            .check(StringSource::new("float f(int a) ^ a + 0.5;"))
            .is_ok());

        compiler.settings_mut().disable(Setting::DumpAst);
        assert!(!compiler.settings().is_enabled(Setting::DumpAst));
    }
}
