// SPDX-License-Identifier: MPL-2.0
//! Asset addressing.
//!
//! Images live at `{root}/images/{set}/{set}_{NN}.{ext}` and narration clips
//! at `{root}/audio/audio_{NN}.mp3`, where `NN` is a one-based number padded
//! to two digits. The layout only builds paths; it never touches the disk.

use super::browsing::{ClipNumber, ContributorIndex, PromptIndex};
use super::catalog::{self, CONTRIBUTORS, PROMPT_COUNT};
use std::path::{Path, PathBuf};

/// Extension of the narration clips.
pub const CLIP_EXTENSION: &str = "mp3";

/// Resolves asset paths below a root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    root: PathBuf,
    image_extension: String,
    archive_extension: String,
}

impl AssetLayout {
    /// Creates a layout.
    ///
    /// `image_extension` is used for the gallery and prompt views,
    /// `archive_extension` for the per-contributor archive.
    pub fn new(
        root: impl Into<PathBuf>,
        image_extension: impl Into<String>,
        archive_extension: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            image_extension: image_extension.into(),
            archive_extension: archive_extension.into(),
        }
    }

    /// Root directory of the assets.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `{root}/images/{set}/{set}_{NN}.{ext}` for a one-based `number`.
    #[must_use]
    pub fn image(&self, set_id: &str, number: usize, extension: &str) -> PathBuf {
        self.root
            .join("images")
            .join(set_id)
            .join(format!("{set_id}_{number:02}.{extension}"))
    }

    /// Image of `contributor` for the given prompt.
    #[must_use]
    pub fn prompt_image(&self, contributor: ContributorIndex, prompt: PromptIndex) -> PathBuf {
        self.image(
            catalog::contributor(contributor),
            prompt.number(),
            &self.image_extension,
        )
    }

    /// Archive image of `contributor` for the given prompt.
    #[must_use]
    pub fn archive_image(&self, contributor: ContributorIndex, prompt: PromptIndex) -> PathBuf {
        self.image(
            catalog::contributor(contributor),
            prompt.number(),
            &self.archive_extension,
        )
    }

    /// Every gallery image, contributor by contributor.
    #[must_use]
    pub fn gallery_images(&self) -> Vec<PathBuf> {
        CONTRIBUTORS
            .iter()
            .flat_map(|set_id| {
                (1..=PROMPT_COUNT).map(move |number| self.image(set_id, number, &self.image_extension))
            })
            .collect()
    }

    /// `{root}/audio/audio_{NN}.mp3`.
    #[must_use]
    pub fn clip(&self, clip: ClipNumber) -> PathBuf {
        self.root
            .join("audio")
            .join(format!("audio_{clip}.{CLIP_EXTENSION}"))
    }

    /// Photograph of the installation shown on the about view.
    #[must_use]
    pub fn about_image(&self) -> PathBuf {
        self.root.join("images").join("about.jpg")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> AssetLayout {
        AssetLayout::new("/srv/site", "jpg", "png")
    }

    #[test]
    fn prompt_image_uses_one_based_padded_number() {
        let contributor = ContributorIndex::new(1).expect("in range");
        let path = layout().prompt_image(contributor, PromptIndex::new(4));
        assert_eq!(path, PathBuf::from("/srv/site/images/anna/anna_05.jpg"));
    }

    #[test]
    fn archive_image_uses_archive_extension() {
        let contributor = ContributorIndex::new(4).expect("in range");
        let path = layout().archive_image(contributor, PromptIndex::LAST);
        assert_eq!(path, PathBuf::from("/srv/site/images/jeff/jeff_45.png"));
    }

    #[test]
    fn clip_path_matches_audio_convention() {
        let path = layout().clip(PromptIndex::FIRST.clip());
        assert_eq!(path, PathBuf::from("/srv/site/audio/audio_01.mp3"));
    }

    #[test]
    fn gallery_lists_every_contributor_image() {
        let images = layout().gallery_images();
        assert_eq!(images.len(), CONTRIBUTORS.len() * PROMPT_COUNT);
        assert_eq!(images[0], PathBuf::from("/srv/site/images/andrey/andrey_01.jpg"));
        assert_eq!(
            images[PROMPT_COUNT],
            PathBuf::from("/srv/site/images/anna/anna_01.jpg")
        );
    }
}
