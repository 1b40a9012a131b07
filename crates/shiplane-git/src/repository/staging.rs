use crate::Result;

use super::Repository;

impl Repository {
    /// Stage every change in the work tree (`git add -A`) and return how many
    /// paths now differ between HEAD and the index.
    ///
    /// # Errors
    ///
    /// Returns an error if the index cannot be updated or compared with HEAD.
    pub fn stage_all(&self) -> Result<usize> {
        let mut index = self.inner.index()?;
        index.add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)?;
        index.update_all(["*"].iter(), None)?;
        index.write()?;

        // An unborn HEAD compares against the empty tree.
        let head_tree = match self.inner.head() {
            Ok(head) => Some(head.peel_to_tree()?),
            Err(_) => None,
        };
        let staged = self
            .inner
            .diff_tree_to_index(head_tree.as_ref(), Some(&index), None)?;

        Ok(staged.deltas().len())
    }
}
