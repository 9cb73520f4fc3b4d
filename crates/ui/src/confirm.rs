use async_trait::async_trait;
use extman_domain::Extension;

/// Interactive confirmation step required before a removal is sent.
#[async_trait]
pub trait Confirm: Send {
    async fn confirm(&mut self, extension: &Extension) -> bool;
}

/// Confirms everything, for `--yes` and scripted use.
pub struct AutoConfirm;

#[async_trait]
impl Confirm for AutoConfirm {
    async fn confirm(&mut self, _extension: &Extension) -> bool {
        true
    }
}
