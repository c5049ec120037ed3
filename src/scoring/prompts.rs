//! Section-specific evaluation prompts for CLIP scoring

use crate::core::SectionKind;

/// Natural-language evaluation prompt for a section of a category's site
pub fn evaluation_prompt(kind: SectionKind, category: &str) -> String {
    match kind {
        SectionKind::Header => format!(
            "Evaluate the header section of a {} website based on visual appeal, \
             creativity, and branding consistency.",
            category
        ),
        SectionKind::Main => format!(
            "Evaluate the main section of a {} website based on design clarity, \
             layout, and visual hierarchy.",
            category
        ),
        SectionKind::Footer => format!(
            "Evaluate the footer section of a {} website based on information \
             completeness and accessibility.",
            category
        ),
        SectionKind::Full => format!(
            "Evaluate the entire {} website homepage for overall design quality, \
             user experience, and branding consistency.",
            category
        ),
    }
}

/// Fallback wording for a section label outside the fixed table
pub fn generic_prompt(label: &str, category: &str) -> String {
    format!("Evaluate the {} section of a {} website.", label, category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_mention_category() {
        for kind in SectionKind::ALL {
            let prompt = evaluation_prompt(kind, "Ecommerce");
            assert!(prompt.contains("Ecommerce"), "missing category in {:?}", kind);
        }
    }

    #[test]
    fn test_prompts_differ_per_section() {
        let prompts: std::collections::BTreeSet<String> = SectionKind::ALL
            .iter()
            .map(|&k| evaluation_prompt(k, "Ecommerce"))
            .collect();
        assert_eq!(prompts.len(), 4);
    }

    #[test]
    fn test_generic_fallback() {
        let prompt = generic_prompt("sidebar", "Ecommerce");
        assert_eq!(
            prompt,
            "Evaluate the sidebar section of a Ecommerce website."
        );
    }
}
