use crate::error::RegistryError;
use anchor_lang::prelude::*;

/// Deserializes a program account that may not have been created yet.
///
/// A PDA that was never initialised carries no data and is still owned by the
/// system program. Such accounts are reported as `None` so read paths can treat
/// a missing history as height zero instead of failing.
pub fn load_optional<T>(info: &AccountInfo) -> Result<Option<T>>
where
    T: AccountDeserialize + Owner,
{
    if info.data_is_empty() {
        return Ok(None);
    }

    require_keys_eq!(*info.owner, T::owner(), RegistryError::InvalidAccountOwner);

    let data = info.try_borrow_data()?;
    let account = T::try_deserialize(&mut &data[..])?;
    Ok(Some(account))
}
