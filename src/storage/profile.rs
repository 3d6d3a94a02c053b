use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::keys;
use super::session_store::SessionStore;
use crate::common::{ApplicationRecord, JobPost, StoreError, StoreResult, Theme, UserRole};

/// Typed view over the session store: preferences, sign-in state, wallet
/// counters and the append-only application / post lists.
pub struct Profile<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Profile<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    // ========== Preferences ==========

    pub fn theme(&self) -> Theme {
        recover(
            keys::THEME,
            self.read_string(keys::THEME).and_then(|value| {
                Theme::parse(&value).ok_or_else(|| StoreError::missing(keys::THEME))
            }),
        )
    }

    pub fn toggle_theme(&self) -> StoreResult<Theme> {
        let next = self.theme().toggled();
        self.store.set(keys::THEME, next.as_str())?;
        Ok(next)
    }

    // ========== Identity ==========

    pub fn user_role(&self) -> Option<UserRole> {
        match self.read_string(keys::USER_ROLE) {
            Ok(value) => UserRole::parse(&value).or_else(|| {
                log::warn!("Ignoring unknown stored role `{value}`");
                None
            }),
            Err(err) => recover(keys::USER_ROLE, Err::<Option<UserRole>, _>(err)),
        }
    }

    pub fn user_name(&self) -> String {
        recover(keys::USER_NAME, self.read_string(keys::USER_NAME))
    }

    pub fn company_name(&self) -> Option<String> {
        recover(keys::COMPANY_NAME, self.read_string(keys::COMPANY_NAME).map(Some))
    }

    #[cfg(test)]
    pub fn is_signed_in(&self) -> bool {
        self.user_role().is_some() && !self.user_name().is_empty()
    }

    pub fn sign_in(&self, role: UserRole, name: &str, company: Option<&str>) -> StoreResult<()> {
        self.store.set(keys::USER_ROLE, role.as_str())?;
        self.store.set(keys::USER_NAME, name.trim())?;
        match company.map(str::trim).filter(|c| !c.is_empty()) {
            Some(company) => self.store.set(keys::COMPANY_NAME, company)?,
            None => self.store.remove(keys::COMPANY_NAME)?,
        }
        Ok(())
    }

    pub fn sign_out(&self) -> StoreResult<()> {
        self.store.remove(keys::USER_ROLE)?;
        self.store.remove(keys::USER_NAME)?;
        self.store.remove(keys::COMPANY_NAME)?;
        log::info!("Signed out");
        Ok(())
    }

    // ========== Wallet ==========

    pub fn xp(&self) -> u64 {
        recover(keys::XP, self.read_counter(keys::XP))
    }

    pub fn award_xp(&self, amount: u64) -> StoreResult<u64> {
        self.bump_counter(keys::XP, amount)
    }

    pub fn company_credits(&self) -> u64 {
        recover(keys::COMPANY_CREDITS, self.read_counter(keys::COMPANY_CREDITS))
    }

    pub fn award_company_credits(&self, amount: u64) -> StoreResult<u64> {
        self.bump_counter(keys::COMPANY_CREDITS, amount)
    }

    // ========== Lists ==========

    /// In submission order.
    pub fn applications(&self) -> Vec<ApplicationRecord> {
        recover(keys::APPLICATIONS, self.read_list(keys::APPLICATIONS))
    }

    pub fn push_application(&self, record: ApplicationRecord) -> StoreResult<()> {
        self.append(keys::APPLICATIONS, record)
    }

    /// In posting order.
    pub fn posts(&self) -> Vec<JobPost> {
        recover(keys::POSTS, self.read_list(keys::POSTS))
    }

    pub fn push_post(&self, post: JobPost) -> StoreResult<()> {
        self.append(keys::POSTS, post)
    }

    // ========== Raw reads ==========

    fn read_string(&self, key: &str) -> StoreResult<String> {
        self.store.get(key)?.ok_or_else(|| StoreError::missing(key))
    }

    fn read_counter(&self, key: &str) -> StoreResult<u64> {
        let raw = self.read_string(key)?;
        raw.trim().parse().map_err(|_| StoreError::missing(key))
    }

    // Other pages share these keys, so one odd element only hides itself.
    fn read_list<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Vec<T>> {
        let raw = self.read_string(key)?;
        let elements: Vec<Value> = serde_json::from_str(&raw).map_err(|err| {
            log::warn!("Ignoring `{key}`, not a JSON array: {err}");
            StoreError::missing(key)
        })?;

        let total = elements.len();
        let items: Vec<T> = elements
            .into_iter()
            .filter_map(|element| serde_json::from_value(element).ok())
            .collect();
        if items.len() < total {
            log::warn!("Skipped {} unreadable entries in `{key}`", total - items.len());
        }
        Ok(items)
    }

    fn bump_counter(&self, key: &str, amount: u64) -> StoreResult<u64> {
        let next = recover(key, self.read_counter(key)).saturating_add(amount);
        self.store.set(key, &next.to_string())?;
        Ok(next)
    }

    // Read-modify-write; a second process on the same profile can lose an
    // append (last write wins). Existing elements are kept verbatim, and a
    // value that is not an array is left alone and reported.
    fn append<T: Serialize>(&self, key: &str, item: T) -> StoreResult<()> {
        let mut elements: Vec<Value> = match self.store.get(key)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        elements.push(serde_json::to_value(item)?);
        self.store.set(key, &serde_json::to_string(&elements)?)
    }
}

/// Substitute the empty default for absent or unreadable state.
fn recover<T: Default>(key: &str, result: StoreResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(StoreError::MissingData { .. }) => {
            log::debug!("No usable value for `{key}`; using default");
            T::default()
        }
        Err(err) => {
            log::warn!("Failed to read `{key}` ({err}); using default");
            T::default()
        }
    }
}
