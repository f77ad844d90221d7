#[derive(Debug)]
pub enum Error {
    YamlParsingError(serde_yaml::Error),
    IOError(std::io::Error),
    MissingDefinitionKey(&'static str),
    InvalidDefinition(&'static str),
    UnknownAutomatonKind(String),
    InvalidSymbol(String),
    DuplicateState(String),
    UnknownState(String),
    SymbolNotInSigma(char),
    TransitionRejected { from: String, symbol: char },
}

pub type Result<T> = std::result::Result<T, Error>;
