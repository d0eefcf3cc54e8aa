//! Wire records grouped by API area.
//!
//! Every type here is a passive record: it is either decoded from a server
//! response or built by the caller and encoded as a request body. Field
//! names follow Rust conventions; the JSON keys are pinned with serde
//! attributes and must not change, including the legacy duplicates some
//! responses still carry.
//!
//! Decoding is lenient: a missing key or a `null` yields the field's
//! default value. Fields the API may leave out are `Option`s and are skipped
//! on encode when unset.
//!
//! Timestamps are `DateTime<Utc>`. A payload offset such as `+02:00` is
//! normalized to `Z` on re-encode; the instant is kept but the text is not
//! byte-identical.

mod actions;
mod analytics;
mod auth;
mod cart;
mod comments;
mod delegation;
mod discussions;
mod notifications;
mod polls;
mod posts;
mod preimages;
mod search;
mod timeline;
mod tips;
mod treasury;
mod users;
mod votes;

pub use actions::{
    AddCommentRequest, CreateReportRequest, Reaction, Report, UpdateCommentRequest,
};
pub use analytics::{DailyStat, NetworkStats, ProposalAnalytics, UserStat};
pub use auth::{
    ClaimQrSessionRequest, EditUserDetailsRequest, PublicSocialLink, QrSessionResponse,
    ResetPasswordRequest, Web2LoginRequest, Web2LoginResponse, Web2SignupRequest,
    Web2SignupResponse, Web3AuthRequest, Web3AuthResponse,
};
pub use cart::{AddCartItemRequest, CartAmount, CartItem, UpdateCartItemRequest};
pub use comments::{Comment, CommentContent};
pub use delegation::{
    CreatePaDelegateRequest, Delegate, DelegationStats, TrackLevelData, TrackStats,
    UpdatePaDelegateRequest,
};
pub use discussions::{CreateDiscussionRequest, Discussion};
pub use notifications::{Notification, NotificationPreferences};
pub use polls::{CreatePollRequest, Poll, PollOption, PollVoteRequest};
pub use posts::{
    ActivityFeedItem, Beneficiary, Bounty, ContentSummary, CreateOffchainPostRequest, OnChainInfo,
    Post, PostListingParams, PostListingResponse, PostMetrics, PostOnchainData, ProfileDetails,
    PublicUser, ReactionCounts, SubscriptionStatus, UpdatePostRequest, VoteMetrics, VoteTally,
    VoteValue,
};
pub use preimages::{Preimage, PreimageListingParams, PreimageListingResponse};
pub use search::{SearchParams, SearchResponse};
pub use timeline::{TimelineEntry, TimelineParams};
pub use tips::{CreateTipRequest, Tip, TipInfo};
pub use treasury::{CreateTreasuryProposalRequest, TreasuryProposal};
pub use users::{User, UserActivity, UserListingParams, UserListingResponse};
pub use votes::{CreateVoteRequest, Vote, VoteListingParams, VoteListingResponse, VotingCurveData};
