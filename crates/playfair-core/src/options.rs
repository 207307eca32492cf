use log::debug;

/// Preparation applied to caller text before it is handed to the cipher.
///
/// The cipher itself rejects every character outside the key matrix. These
/// options let a caller turn free text such as `"HARI KAMIS LIBUR NASIONAL"`
/// into a letter sequence first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    /// Drop everything that is not an ASCII letter (spaces, digits, punctuation).
    pub strip_non_alphabetic: bool,

    /// Replace `J` with `I`, the usual merge for a matrix without `J`.
    pub merge_j_into_i: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            strip_non_alphabetic: true,
            merge_j_into_i: false,
        }
    }
}

impl TextOptions {
    pub fn with_strip_non_alphabetic(mut self, strip: bool) -> Self {
        self.strip_non_alphabetic = strip;
        self
    }

    pub fn with_merge_j_into_i(mut self, merge: bool) -> Self {
        self.merge_j_into_i = merge;
        self
    }

    /// Apply the enabled steps to `text`. Letter case is kept.
    pub fn prepare(&self, text: &str) -> String {
        let prepared: String = text
            .chars()
            .filter(|c| !self.strip_non_alphabetic || c.is_ascii_alphabetic())
            .map(|c| match c {
                'J' if self.merge_j_into_i => 'I',
                'j' if self.merge_j_into_i => 'i',
                c => c,
            })
            .collect();

        if prepared.len() != text.len() {
            debug!(
                "prepared text: {} of {} bytes kept",
                prepared.len(),
                text.len()
            );
        }

        prepared
    }
}
