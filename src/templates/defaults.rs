// SPDX-License-Identifier: MIT
//! Built-in stock templates.
//!
//! A starter set covering common project layouts, merged into every store
//! at load time. A user-saved template with the same name takes precedence.

/// Return the built-in templates as `(name, paths)` pairs.
pub fn default_templates() -> Vec<(&'static str, Vec<String>)> {
    fn paths(list: &[&str]) -> Vec<String> {
        list.iter().map(|p| p.to_string()).collect()
    }

    vec![
        (
            "Film / Video",
            paths(&[
                "01 Project/01 Premiere",
                "01 Project/02 After Effects",
                "02 Assets/01 Footage",
                "02 Assets/02 Stock",
                "02 Assets/03 Audio/01 Location Sound",
                "02 Assets/03 Audio/02 ADR",
                "02 Assets/03 Audio/03 SFX",
                "02 Assets/03 Audio/04 Music",
                "02 Assets/04 Graphics/01 Logos",
                "02 Assets/04 Graphics/02 Credits",
                "02 Assets/04 Graphics/03 Photos",
                "02 Assets/04 Graphics/04 Graphic Elements",
                "03 Docs",
                "04 Exports",
                "05 Stuff",
            ]),
        ),
        (
            "AI Video Production",
            paths(&[
                "01 Project/01 Premiere",
                "01 Project/02 After Effects",
                "01 Project/03 Photoshop",
                "02 REFS/01 Locations",
                "02 REFS/02 Characters",
                "02 REFS/03 Moodboard",
                "03 Assets/01 Working Frames",
                "03 Assets/02 Frames",
                "03 Assets/03 Videos",
                "03 Assets/04 Audio/01 Recording",
                "03 Assets/04 Audio/02 SFX",
                "03 Assets/04 Audio/03 Ambience",
                "03 Assets/04 Audio/04 Music",
                "03 Assets/05 Graphics/01 Logos",
                "03 Assets/05 Graphics/02 Graphic Elements",
                "04 Exports",
                "05 Stuff",
            ]),
        ),
        (
            "Web Project",
            paths(&[
                "src",
                "src/assets/images",
                "src/assets/fonts",
                "src/components",
                "src/styles",
                "public",
            ]),
        ),
        (
            "Data Science",
            paths(&[
                "data/raw",
                "data/processed",
                "notebooks",
                "src/models",
                "src/visualization",
            ]),
        ),
        ("Photo Archive", paths(&["Photos", "Edited", "Exports"])),
        (
            "Game Dev",
            paths(&["Assets/Sprites", "Assets/Audio", "Scripts", "Scenes"]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_has_six_templates() {
        assert_eq!(default_templates().len(), 6);
    }

    #[test]
    fn every_default_has_a_name_and_at_least_one_path() {
        for (name, paths) in default_templates() {
            assert!(!name.is_empty());
            assert!(!paths.is_empty(), "template '{name}' has no paths");
        }
    }

    #[test]
    fn paths_use_forward_slashes_and_non_empty_segments() {
        for (name, paths) in default_templates() {
            for path in paths {
                assert!(!path.contains('\\'), "template '{name}': {path}");
                assert!(
                    path.split('/').all(|segment| !segment.trim().is_empty()),
                    "template '{name}' has an empty segment in {path}"
                );
            }
        }
    }
}
