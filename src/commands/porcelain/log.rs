use crate::areas::repository::Repository;
use crate::artifacts::commit::Commit;
use crate::artifacts::errors::Result;
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
}

impl Repository {
    /// List every commit, newest first
    pub fn log(&self, opts: &LogOptions) -> Result<Vec<Commit>> {
        self.ensure_initialized()?;

        let commits = self.commits().list()?;

        for commit in &commits {
            if opts.oneline {
                self.show_commit_oneline(commit)?;
            } else {
                self.show_commit_medium(commit)?;
                writeln!(self.writer())?;
            }
        }

        Ok(commits)
    }

    pub(crate) fn show_commit_medium(&self, commit: &Commit) -> Result<()> {
        writeln!(
            self.writer(),
            "{}",
            format!("commit {}", commit.hash()).yellow()
        )?;
        writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }

    fn show_commit_oneline(&self, commit: &Commit) -> Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            commit.short_hash().yellow(),
            commit.short_message()
        )?;

        Ok(())
    }
}
