//! API key access mask.
//!
//! Every API key carries a 64-bit mask in which bit *i* grants the
//! correspondingly numbered permission. The key-info call returns the mask
//! once at login; it never changes for the lifetime of a session. Gated
//! remote calls must be guarded with a mask check first; calling without
//! the grant is a contract violation, not a runtime condition.

use bitflags::bitflags;

bitflags! {
    /// Key permissions represented as a 64-bit bitfield.
    ///
    /// Bits 0-26 are the named permissions the key service currently
    /// issues; higher bits are preserved verbatim for forward
    /// compatibility.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct AccessMask: u64 {
        /// Wallet balance of each character
        const ACCOUNT_BALANCE           = 1 << 0;
        /// Full asset list
        const ASSET_LIST                = 1 << 1;
        /// Attendee lists for calendar events
        const CALENDAR_EVENT_ATTENDEES  = 1 << 2;
        /// Character sheet: corporation, balance, and owned skills
        const CHARACTER_SHEET           = 1 << 3;
        /// Standings and contacts (PCs, corps, alliances)
        const CONTACT_LIST              = 1 << 4;
        /// Contact notifications
        const CONTACT_NOTIFICATIONS     = 1 << 5;
        /// Faction warfare statistics
        const FAC_WAR_STATS             = 1 << 6;
        /// Industry job list
        const INDUSTRY_JOBS             = 1 << 7;
        /// Kill log
        const KILL_LOG                  = 1 << 8;
        /// Full bodies of EVE mail
        const MAIL_BODIES               = 1 << 9;
        /// Mailing list membership
        const MAILING_LISTS             = 1 << 10;
        /// Mail message headers
        const MAIL_MESSAGES             = 1 << 11;
        /// Market order list
        const MARKET_ORDERS             = 1 << 12;
        /// Medals awarded
        const MEDALS                    = 1 << 13;
        /// Notification headers
        const NOTIFICATIONS             = 1 << 14;
        /// Full notification texts
        const NOTIFICATION_TEXTS        = 1 << 15;
        /// Research agent jobs
        const RESEARCH                  = 1 << 16;
        /// Skill currently in training
        const SKILL_IN_TRAINING         = 1 << 17;
        /// Full skill queue
        const SKILL_QUEUE               = 1 << 18;
        /// NPC standings
        const STANDINGS                 = 1 << 19;
        /// Upcoming calendar events
        const UPCOMING_CALENDAR_EVENTS  = 1 << 20;
        /// Wallet journal
        const WALLET_JOURNAL            = 1 << 21;
        /// Wallet transactions
        const WALLET_TRANSACTIONS       = 1 << 22;
        /// Public character information record; also gates account status
        const CHARACTER_INFO            = 1 << 23;
        /// Private character information record
        const CHARACTER_INFO_PRIVATE    = 1 << 24;
        /// Account status record
        const ACCOUNT_STATUS            = 1 << 25;
        /// Contract list
        const CONTRACTS                 = 1 << 26;
    }
}

/// Display names for every named permission, in mask bit order.
///
/// The order is stable and drives the access table shown on the character
/// list page.
pub const PERMISSION_NAMES: [(AccessMask, &str); 27] = [
    (AccessMask::ACCOUNT_BALANCE, "Account Balance"),
    (AccessMask::ASSET_LIST, "Asset List"),
    (AccessMask::CALENDAR_EVENT_ATTENDEES, "Calendar Event Attendees"),
    (AccessMask::CHARACTER_SHEET, "Character Sheet"),
    (
        AccessMask::CONTACT_LIST,
        "Standings/Contacts (PCs/Corps/Alliances)",
    ),
    (AccessMask::CONTACT_NOTIFICATIONS, "Contact Notifications"),
    (AccessMask::FAC_WAR_STATS, "Faction Warfare Stats"),
    (AccessMask::INDUSTRY_JOBS, "Industry Jobs"),
    (AccessMask::KILL_LOG, "Kill Log"),
    (AccessMask::MAIL_BODIES, "Mail Bodies"),
    (AccessMask::MAILING_LISTS, "Mailing Lists"),
    (AccessMask::MAIL_MESSAGES, "Mail Messages"),
    (AccessMask::MARKET_ORDERS, "Market Orders"),
    (AccessMask::MEDALS, "Medals"),
    (AccessMask::NOTIFICATIONS, "Notifications"),
    (AccessMask::NOTIFICATION_TEXTS, "Notification Texts"),
    (AccessMask::RESEARCH, "Research Jobs"),
    (AccessMask::SKILL_IN_TRAINING, "Skill In Training"),
    (AccessMask::SKILL_QUEUE, "Skill Queue"),
    (AccessMask::STANDINGS, "Standings (NPC)"),
    (AccessMask::UPCOMING_CALENDAR_EVENTS, "Calendar Events"),
    (AccessMask::WALLET_JOURNAL, "Wallet Journal"),
    (AccessMask::WALLET_TRANSACTIONS, "Wallet Transactions"),
    (AccessMask::CHARACTER_INFO, "Character Information"),
    (
        AccessMask::CHARACTER_INFO_PRIVATE,
        "Private Character Information",
    ),
    (AccessMask::ACCOUNT_STATUS, "Account Status"),
    (AccessMask::CONTRACTS, "Contracts"),
];

impl AccessMask {
    /// Create a mask from the raw integer the key-info call returns.
    ///
    /// Unknown bits are preserved so that positional checks keep working
    /// when the key service introduces new permissions.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self::from_bits_retain(raw)
    }

    /// The raw integer value of the mask.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.bits()
    }

    /// Check whether the permission at the given bit position is granted.
    ///
    /// Valid for any position in the mask's integer width; positions 0-26
    /// are the named permissions.
    ///
    /// # Examples
    ///
    /// ```
    /// use kw_server::access::AccessMask;
    ///
    /// let mask = AccessMask::from_raw(0b1000);
    /// assert!(mask.grants(3));
    /// assert!(!mask.grants(25));
    /// ```
    #[must_use]
    pub const fn grants(self, bit: u8) -> bool {
        self.bits() & (1u64 << bit) != 0
    }

    /// Check if this mask includes the specified permission(s).
    ///
    /// # Examples
    ///
    /// ```
    /// use kw_server::access::AccessMask;
    ///
    /// let mask = AccessMask::CHARACTER_SHEET | AccessMask::ACCOUNT_STATUS;
    /// assert!(mask.has(AccessMask::CHARACTER_SHEET));
    /// assert!(!mask.has(AccessMask::KILL_LOG));
    /// ```
    #[must_use]
    pub const fn has(self, permission: Self) -> bool {
        self.contains(permission)
    }
}
