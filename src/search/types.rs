use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Candidate {
    pub path: String,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub score: f64,
}

#[cfg(test)]
impl Candidate {
    pub fn new(path: &str, synopsis: &str, score: f64) -> Self {
        Self {
            path: path.to_string(),
            synopsis: synopsis.to_string(),
            score,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default, alias = "Results")]
    pub results: Vec<Candidate>,
}
