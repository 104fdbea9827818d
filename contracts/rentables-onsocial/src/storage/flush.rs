use crate::*;

impl Contract {
    // Storage accounting invariant: flush deferred writes before measuring usage.
    pub(crate) fn flush_state(&mut self) {
        self.tokens_by_id.flush();
        self.tokens_per_owner.flush();
        self.operators.flush();
        self.users.flush();
    }

    #[inline]
    pub(crate) fn storage_usage_flushed(&mut self) -> u64 {
        self.flush_state();
        env::storage_usage()
    }
}
