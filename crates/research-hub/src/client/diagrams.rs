//! Matching model-described figures to locally held diagrams.

use crate::models::{Diagram, DiagramDescription, ResolvedDiagram};

/// Kind used when no local diagram can be attached.
pub const DEFAULT_KIND: &str = "Figure";

/// Attach an image and kind to every description.
///
/// A description takes the first diagram whose title contains its title, or
/// whose title is contained in it, ignoring case. Failing that, position `i`
/// falls back to `diagrams[i % len]`. With no diagrams the image is empty.
#[must_use]
pub fn resolve_diagrams(
    descriptions: Vec<DiagramDescription>,
    diagrams: &[Diagram],
) -> Vec<ResolvedDiagram> {
    descriptions
        .into_iter()
        .enumerate()
        .map(|(index, desc)| {
            let matched = find_by_title(&desc.title, diagrams)
                .or_else(|| (!diagrams.is_empty()).then(|| &diagrams[index % diagrams.len()]));

            let (image_url, kind) = matched.map_or_else(
                || (String::new(), DEFAULT_KIND.to_string()),
                |d| {
                    let kind = if d.kind.is_empty() { DEFAULT_KIND } else { d.kind.as_str() };
                    (d.image_url.clone(), kind.to_string())
                },
            );

            ResolvedDiagram {
                title: desc.title,
                description: desc.description,
                importance: desc.importance,
                image_url,
                kind,
            }
        })
        .collect()
}

fn find_by_title<'a>(title: &str, diagrams: &'a [Diagram]) -> Option<&'a Diagram> {
    let wanted = title.to_lowercase();
    diagrams.iter().find(|d| {
        let have = d.title.to_lowercase();
        have.contains(&wanted) || wanted.contains(&have)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn describe(title: &str) -> DiagramDescription {
        DiagramDescription {
            title: title.to_string(),
            description: format!("{title} description"),
            importance: "high".to_string(),
        }
    }

    #[test]
    fn test_title_containment_either_way() {
        let diagrams = catalog::showcase_diagrams();
        let resolved = resolve_diagrams(
            vec![describe("multi-head attention"), describe("Figure 3: Performance Comparison table")],
            &diagrams,
        );

        assert_eq!(resolved[0].image_url, diagrams[1].image_url);
        assert_eq!(resolved[0].kind, "Mechanism");
        assert_eq!(resolved[1].image_url, diagrams[2].image_url);
        assert_eq!(resolved[1].kind, "Results");
    }

    #[test]
    fn test_positional_fallback_wraps() {
        let diagrams = catalog::showcase_diagrams();
        let descriptions = (0..4).map(|i| describe(&format!("Unrelated {i}"))).collect();
        let resolved = resolve_diagrams(descriptions, &diagrams);

        assert_eq!(resolved[0].image_url, diagrams[0].image_url);
        assert_eq!(resolved[2].image_url, diagrams[2].image_url);
        assert_eq!(resolved[3].image_url, diagrams[0].image_url);
    }

    #[test]
    fn test_single_unmatched_diagram_backs_every_description() {
        let only = vec![catalog::showcase_diagrams().remove(0)];
        let descriptions = ["Loss curves", "Ablation grid", "Dataset overview"]
            .into_iter()
            .map(describe)
            .collect();
        let resolved = resolve_diagrams(descriptions, &only);

        assert_eq!(resolved.len(), 3);
        assert!(resolved.iter().all(|d| d.image_url == only[0].image_url));
        assert_eq!(resolved[2].title, "Dataset overview");
    }

    #[test]
    fn test_no_local_diagrams() {
        let resolved = resolve_diagrams(vec![describe("Anything")], &[]);
        assert_eq!(resolved.len(), 1);
        assert!(resolved[0].image_url.is_empty());
        assert_eq!(resolved[0].kind, DEFAULT_KIND);
        assert_eq!(resolved[0].importance, "high");
    }
}
