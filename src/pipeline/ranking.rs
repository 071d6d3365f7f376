use crate::pipeline::types::EnrichedItem;

pub fn rank(items: Vec<EnrichedItem>) -> Vec<EnrichedItem> {
    let mut roots: Vec<EnrichedItem> = items.into_iter().filter(|i| !i.is_fork).collect();
    roots.sort_by(|a, b| b.stars().cmp(&a.stars()));
    roots
}
