use std::cell::RefCell;

use crate::{GitError, PushInfo, Repository, Result};

impl Repository {
    /// Push the current branch and the given tags to `remote_name`.
    ///
    /// Credentials come from the SSH agent for SSH remotes and from the
    /// configured git credential helper for HTTPS remotes.
    ///
    /// # Errors
    ///
    /// Returns an error if HEAD is detached, the remote does not exist, the
    /// transport fails, or the remote rejects any reference.
    pub fn push(&self, remote_name: &str, tags: &[&str]) -> Result<PushInfo> {
        let head = self.inner.head()?;
        if !head.is_branch() {
            return Err(GitError::DetachedHead);
        }
        let branch_ref = head.name().ok_or(GitError::DetachedHead)?.to_string();

        let mut remote =
            self.inner
                .find_remote(remote_name)
                .map_err(|_| GitError::RemoteNotFound {
                    name: remote_name.to_string(),
                })?;

        let mut refspecs = vec![format!("{branch_ref}:{branch_ref}")];
        refspecs.extend(
            tags.iter()
                .map(|tag| format!("refs/tags/{tag}:refs/tags/{tag}")),
        );

        let config = self.inner.config()?;
        let rejection: RefCell<Option<(String, String)>> = RefCell::new(None);

        {
            let mut callbacks = git2::RemoteCallbacks::new();
            callbacks.credentials(|url, username, allowed| {
                if allowed.contains(git2::CredentialType::SSH_KEY) {
                    git2::Cred::ssh_key_from_agent(username.unwrap_or("git"))
                } else if allowed.contains(git2::CredentialType::USER_PASS_PLAINTEXT) {
                    git2::Cred::credential_helper(&config, url, username)
                } else {
                    git2::Cred::default()
                }
            });
            callbacks.push_update_reference(|refname, status| {
                if let Some(message) = status {
                    rejection
                        .borrow_mut()
                        .get_or_insert_with(|| (refname.to_string(), message.to_string()));
                }
                Ok(())
            });

            let mut options = git2::PushOptions::new();
            options.remote_callbacks(callbacks);
            remote.push(&refspecs, Some(&mut options))?;
        }

        if let Some((refname, message)) = rejection.into_inner() {
            return Err(GitError::PushRejected { refname, message });
        }

        Ok(PushInfo {
            remote: remote_name.to_string(),
            refspecs,
        })
    }
}
