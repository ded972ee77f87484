use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum Error {
    /// A `<marker><number>` token on a `G1` line whose remainder is not a
    /// valid float. Fatal for the whole extraction; no partial recovery.
    #[snafu(display("line {}: unparseable numeric token {token:?}", line + 1))]
    ParseFloat { line: usize, token: String },
}
