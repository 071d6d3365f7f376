use crate::error::{Result, StarforkError};

pub const HOSTED_PREFIX: &str = "github.com";

pub fn is_hosted(path: &str) -> bool {
    path.starts_with(HOSTED_PREFIX)
}

pub fn parse_hosted_path(path: &str) -> Result<(String, String)> {
    let mut parts = path.split('/').skip(1);
    match (parts.next(), parts.next()) {
        (Some(owner), Some(name)) if !owner.is_empty() && !name.is_empty() => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => Err(StarforkError::MalformedPath(path.to_string())),
    }
}
