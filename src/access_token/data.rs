use time::OffsetDateTime;

use crate::owner_id::OwnerId;

pub struct AccessTokenData {
    pub owner: OwnerId,
    pub not_before: OffsetDateTime,
    pub expires_at: OffsetDateTime,
}
