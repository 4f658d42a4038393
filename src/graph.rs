use crate::models::{GlossaryData, GraphLink, GraphNode, GraphResponse};
use std::collections::HashMap;

// Related terms are stored as free-form names, so edges only exist where a
// name resolves (case-insensitively) to another stored term.
pub fn build_graph(data: &GlossaryData) -> GraphResponse {
    let ids_by_name: HashMap<String, u64> = data
        .terms
        .iter()
        .map(|term| (term.term.to_lowercase(), term.id))
        .collect();

    let nodes = data
        .terms
        .iter()
        .map(|term| GraphNode {
            id: term.id,
            label: term.term.clone(),
            category: term.category.clone(),
        })
        .collect();

    let mut links = Vec::new();
    for term in &data.terms {
        for name in &term.related_terms {
            if let Some(&target) = ids_by_name.get(name.to_lowercase().as_str()) {
                if target != term.id {
                    links.push(GraphLink {
                        source: term.id,
                        target,
                    });
                }
            }
        }
    }

    GraphResponse { nodes, links }
}
