use crate::{GitError, Result, TagInfo};

use super::Repository;

impl Repository {
    /// Create an annotated release tag pointing at HEAD.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::TagExists`] if a tag of that name is already
    /// present, or an error if the name is not a valid reference name.
    pub fn create_tag(&self, name: &str, message: &str) -> Result<TagInfo> {
        let refname = format!("refs/tags/{name}");
        if self.inner.find_reference(&refname).is_ok() {
            return Err(GitError::TagExists {
                name: name.to_string(),
            });
        }

        let target = self.inner.head()?.peel_to_commit()?;
        let tagger = self.inner.signature()?;
        self.inner
            .tag(name, target.as_object(), &tagger, message, false)?;

        Ok(TagInfo {
            name: name.to_string(),
            target_sha: target.id().to_string(),
        })
    }
}
