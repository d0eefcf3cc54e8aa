//! Registry of every wire record by name.
//!
//! Lets tools that only have a type name at runtime (fixture checkers, the
//! CLI) round-trip a payload through the right record.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

use crate::domain::*;
use crate::error::{ApiError, CodecError, CodecResult};
use crate::fidelity::{self, FidelityReport};

macro_rules! schema_kinds {
    ($($area:literal => [$($kind:ident),+ $(,)?]),+ $(,)?) => {
        /// Name of one wire record.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
        #[strum(serialize_all = "snake_case")]
        pub enum SchemaKind {
            $($($kind,)+)+
        }

        impl SchemaKind {
            /// API area the record belongs to.
            pub const fn area(self) -> &'static str {
                match self {
                    $($(Self::$kind)|+ => $area,)+
                }
            }

            /// Decode `value` as this record and encode it again.
            pub fn roundtrip(self, value: &Value) -> CodecResult<Value> {
                match self {
                    $($(Self::$kind => fidelity::roundtrip::<$kind>(value),)+)+
                }
            }
        }
    };
}

schema_kinds! {
    "common" => [ApiError],
    "auth" => [
        Web3AuthRequest,
        Web3AuthResponse,
        Web2LoginRequest,
        Web2LoginResponse,
        Web2SignupRequest,
        Web2SignupResponse,
        ResetPasswordRequest,
        QrSessionResponse,
        ClaimQrSessionRequest,
        EditUserDetailsRequest,
        PublicSocialLink,
    ],
    "posts" => [
        PostListingParams,
        PostListingResponse,
        Post,
        PostMetrics,
        ReactionCounts,
        OnChainInfo,
        VoteMetrics,
        VoteTally,
        VoteValue,
        Beneficiary,
        PublicUser,
        ProfileDetails,
        PostOnchainData,
        ContentSummary,
        ActivityFeedItem,
        CreateOffchainPostRequest,
        UpdatePostRequest,
        SubscriptionStatus,
        Bounty,
    ],
    "comments" => [Comment],
    "votes" => [
        VoteListingParams,
        VoteListingResponse,
        Vote,
        VotingCurveData,
        CreateVoteRequest,
    ],
    "actions" => [
        AddCommentRequest,
        UpdateCommentRequest,
        Reaction,
        Report,
        CreateReportRequest,
    ],
    "users" => [User, UserActivity, UserListingParams, UserListingResponse],
    "preimages" => [Preimage, PreimageListingParams, PreimageListingResponse],
    "cart" => [CartItem, CartAmount, AddCartItemRequest, UpdateCartItemRequest],
    "delegation" => [
        DelegationStats,
        Delegate,
        CreatePaDelegateRequest,
        UpdatePaDelegateRequest,
        TrackStats,
        TrackLevelData,
    ],
    "treasury" => [TreasuryProposal, CreateTreasuryProposalRequest],
    "tips" => [Tip, TipInfo, CreateTipRequest],
    "discussions" => [Discussion, CreateDiscussionRequest],
    "polls" => [Poll, PollOption, CreatePollRequest, PollVoteRequest],
    "notifications" => [Notification, NotificationPreferences],
    "analytics" => [ProposalAnalytics, DailyStat, UserStat, NetworkStats],
    "search" => [SearchParams, SearchResponse],
    "timeline" => [TimelineEntry, TimelineParams],
}

impl SchemaKind {
    /// Snake-case name, e.g. `post_listing_response`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// All registered kinds in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Round-trip `value` and compare the result with the input.
    pub fn check(self, value: &Value) -> CodecResult<FidelityReport> {
        let reencoded = self.roundtrip(value)?;
        Ok(fidelity::compare(value, &reencoded))
    }

    /// Kind named by a fixture file stem: `<kind>[.<label>]`.
    ///
    /// `post.minimal` and `post_listing_response` both resolve; the label
    /// after the first dot is ignored.
    pub fn resolve_file_stem(stem: &str) -> Option<Self> {
        stem.split('.').next().and_then(|name| name.parse().ok())
    }
}

/// Lowercase with separators removed, so `post_listing_response`,
/// `post-listing-response` and `PostListingResponse` compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for SchemaKind {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s.trim());
        Self::iter()
            .find(|kind| normalize(kind.name()) == wanted)
            .ok_or_else(|| CodecError::UnknownType(s.to_string()))
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
