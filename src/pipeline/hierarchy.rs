use crate::pipeline::types::EnrichedItem;

pub fn hierarchise(mut items: Vec<EnrichedItem>) -> Vec<EnrichedItem> {
    let links = fork_links(&items);

    for children in &links {
        for &child in children {
            items[child].is_fork = true;
        }
    }

    let flat = items.clone();
    for (idx, item) in items.iter_mut().enumerate() {
        let mut ancestry = vec![idx];
        item.children = materialise(&flat, &links, idx, &mut ancestry);
    }

    items
}

// links[a]: indices of the items that are forks of item a
fn fork_links(items: &[EnrichedItem]) -> Vec<Vec<usize>> {
    items
        .iter()
        .map(|parent| {
            let mut children = Vec::new();
            for fork in &parent.fork_names {
                for (idx, candidate) in items.iter().enumerate() {
                    if candidate.full_name == *fork {
                        children.push(idx);
                    }
                }
            }
            children
        })
        .collect()
}

fn materialise(
    flat: &[EnrichedItem],
    links: &[Vec<usize>],
    idx: usize,
    ancestry: &mut Vec<usize>,
) -> Vec<EnrichedItem> {
    let mut out = Vec::with_capacity(links[idx].len());
    for &child_idx in &links[idx] {
        if ancestry.contains(&child_idx) {
            tracing::warn!(
                parent = %flat[idx].full_name,
                child = %flat[child_idx].full_name,
                "fork cycle in repository metadata; skipping"
            );
            continue;
        }
        ancestry.push(child_idx);
        let mut child = flat[child_idx].clone();
        child.children = materialise(flat, links, child_idx, ancestry);
        ancestry.pop();
        out.push(child);
    }
    out
}
