//! Proposals, discussions posts and their on-chain metadata.
//!
//! Listing and post responses still carry legacy keys next to the keys the
//! API currently populates (`posts`/`items`, `count`/`totalCount`,
//! `post_id`/`index`, `post_type`/`proposalType`). Both are kept so that a
//! payload decodes and re-encodes without loss; the accessor methods pick
//! the populated one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Listing
// ============================================================================

/// Filters for the post listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostListingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(rename = "listingLimit", skip_serializing_if = "Option::is_none")]
    pub listing_limit: Option<i64>,
    /// Governance track number
    #[serde(rename = "trackNo", skip_serializing_if = "Option::is_none")]
    pub track_no: Option<i64>,
    #[serde(rename = "trackStatus", skip_serializing_if = "Option::is_none")]
    pub track_status: Option<String>,
    #[serde(rename = "proposalType", skip_serializing_if = "Option::is_none")]
    pub proposal_type: Option<String>,
    #[serde(rename = "sortBy", skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(rename = "searchTerm", skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    /// Track origin name (e.g. "Root", "SmallSpender")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl PostListingParams {
    /// Listing filtered to one proposal type.
    pub fn for_proposal_type(proposal_type: impl Into<String>) -> Self {
        Self {
            proposal_type: Some(proposal_type.into()),
            ..Default::default()
        }
    }

    /// Set the page number.
    #[must_use]
    pub const fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: i64) -> Self {
        self.listing_limit = Some(limit);
        self
    }

    /// Restrict to a governance track.
    #[must_use]
    pub const fn with_track(mut self, track_no: i64) -> Self {
        self.track_no = Some(track_no);
        self
    }
}

/// One page of posts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostListingResponse {
    /// Legacy list key
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub posts: Vec<Post>,
    /// List key populated by the current API
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub items: Vec<Post>,
    /// Legacy total key
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub count: i64,
    /// Total key populated by the current API
    #[serde(rename = "totalCount", deserialize_with = "crate::wire::null_as_default")]
    pub total_count: i64,
}

impl PostListingResponse {
    /// Posts on this page, preferring `items` over the legacy `posts`.
    pub fn posts(&self) -> &[Post] {
        if self.items.is_empty() {
            &self.posts
        } else {
            &self.items
        }
    }

    /// Total number of matching posts, preferring `totalCount` over `count`.
    pub const fn total(&self) -> i64 {
        if self.total_count == 0 {
            self.count
        } else {
            self.total_count
        }
    }
}

// ============================================================================
// Post
// ============================================================================

/// A proposal or discussion post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub id: String,
    /// Legacy numeric id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<i64>,
    /// On-chain or off-chain index
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub index: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "createdAt", deserialize_with = "crate::wire::null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", deserialize_with = "crate::wire::null_as_default")]
    pub updated_at: DateTime<Utc>,
    /// Legacy proposal type key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_type: Option<String>,
    #[serde(rename = "proposalType", deserialize_with = "crate::wire::null_as_default")]
    pub proposal_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "proposer", skip_serializing_if = "Option::is_none")]
    pub proposer_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactions_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views_count: Option<i64>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion_proposal_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounty_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_hash: Option<String>,
    /// Origin of the record (e.g. "polkassembly", "subsquare")
    #[serde(rename = "dataSource", deserialize_with = "crate::wire::null_as_default")]
    pub data_source: String,
    /// Who may comment (e.g. "all", "onchain_verified")
    #[serde(rename = "allowedCommentor", deserialize_with = "crate::wire::null_as_default")]
    pub allowed_commentor: String,
    #[serde(rename = "isDeleted", deserialize_with = "crate::wire::null_as_default")]
    pub is_deleted: bool,
    /// Content is the server's placeholder, not written by the proposer
    #[serde(rename = "isDefaultContent", deserialize_with = "crate::wire::null_as_default")]
    pub is_default_content: bool,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub metrics: PostMetrics,
    #[serde(rename = "onChainInfo", skip_serializing_if = "Option::is_none")]
    pub on_chain_info: Option<OnChainInfo>,
    #[serde(rename = "publicUser", skip_serializing_if = "Option::is_none")]
    pub public_user: Option<PublicUser>,
}

impl Post {
    /// Post index, preferring `index` over the legacy `post_id`.
    pub fn post_index(&self) -> i64 {
        match self.post_id {
            Some(legacy) if self.index == 0 => legacy,
            _ => self.index,
        }
    }

    /// Proposal type, preferring `proposalType` over the legacy `post_type`.
    pub fn kind(&self) -> &str {
        match self.post_type.as_deref() {
            Some(legacy) if self.proposal_type.is_empty() => legacy,
            _ => &self.proposal_type,
        }
    }
}

/// Engagement counters attached to a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostMetrics {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub reactions: ReactionCounts,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub comments: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionCounts {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub like: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub dislike: i64,
}

// ============================================================================
// On-chain metadata
// ============================================================================

/// Chain-indexed state of a referendum or proposal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnChainInfo {
    #[serde(rename = "createdAt", deserialize_with = "crate::wire::null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub index: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub origin: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub proposer: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub status: String,
    #[serde(rename = "type", deserialize_with = "crate::wire::null_as_default")]
    pub proposal_type: String,
    /// Preimage hash of the proposed call
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub hash: String,
    #[serde(rename = "voteMetrics", deserialize_with = "crate::wire::null_as_default")]
    pub vote_metrics: VoteMetrics,
    #[serde(rename = "decisionPeriodEndsAt", skip_serializing_if = "Option::is_none")]
    pub decision_period_ends_at: Option<DateTime<Utc>>,
    #[serde(rename = "preparePeriodEndsAt", skip_serializing_if = "Option::is_none")]
    pub prepare_period_ends_at: Option<DateTime<Utc>>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::wire::null_as_default"
    )]
    pub beneficiaries: Vec<Beneficiary>,
}

/// Aggregated tallies for a referendum. Amounts are planck strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoteMetrics {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub nay: VoteTally,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub aye: VoteTally,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub support: VoteValue,
    #[serde(rename = "bareAyes", deserialize_with = "crate::wire::null_as_default")]
    pub bare_ayes: VoteValue,
}

/// Voter count and summed balance for one side of a referendum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoteTally {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub count: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoteValue {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub value: String,
}

/// Recipient of a treasury spend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Beneficiary {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub amount: String,
    /// Asset id; empty for the native token
    #[serde(rename = "assetId", deserialize_with = "crate::wire::null_as_default")]
    pub asset_id: String,
}

// ============================================================================
// Author profile
// ============================================================================

/// Public view of a post author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicUser {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub username: String,
    #[serde(rename = "profileScore", deserialize_with = "crate::wire::null_as_default")]
    pub profile_score: f64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub rank: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub addresses: Vec<String>,
    #[serde(rename = "profileDetails", deserialize_with = "crate::wire::null_as_default")]
    pub profile_details: ProfileDetails,
}

/// Profile decorations. Badge and link entries vary in shape between
/// deployments and are kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDetails {
    #[serde(rename = "achievementBadges", deserialize_with = "crate::wire::null_as_default")]
    pub achievement_badges: Vec<Value>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub badges: Vec<Value>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub bio: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub title: String,
    #[serde(rename = "coverImage", deserialize_with = "crate::wire::null_as_default")]
    pub cover_image: String,
    #[serde(rename = "publicSocialLinks", deserialize_with = "crate::wire::null_as_default")]
    pub public_social_links: Vec<Value>,
}

// ============================================================================
// Auxiliary post data
// ============================================================================

/// Vote summary fetched from the chain indexer for a single post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostOnchainData {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub hash: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub status: String,
    #[serde(rename = "ayesCount", deserialize_with = "crate::wire::null_as_default")]
    pub ayes_count: i64,
    #[serde(rename = "naysCount", deserialize_with = "crate::wire::null_as_default")]
    pub nays_count: i64,
    #[serde(rename = "supportAmount", deserialize_with = "crate::wire::null_as_default")]
    pub support_amount: String,
    #[serde(rename = "againstAmount", deserialize_with = "crate::wire::null_as_default")]
    pub against_amount: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub turnout: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub electorate: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub threshold: String,
}

/// AI-generated summary of a post's content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSummary {
    #[serde(rename = "createdAt", deserialize_with = "crate::wire::null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub id: String,
    #[serde(rename = "indexOrHash", deserialize_with = "crate::wire::null_as_default")]
    pub index_or_hash: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub network: String,
    #[serde(rename = "postSummary", deserialize_with = "crate::wire::null_as_default")]
    pub post_summary: String,
    #[serde(rename = "proposalType", deserialize_with = "crate::wire::null_as_default")]
    pub proposal_type: String,
    #[serde(rename = "updatedAt", deserialize_with = "crate::wire::null_as_default")]
    pub updated_at: DateTime<Utc>,
}

/// Entry of the activity feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityFeedItem {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "crate::wire::null_as_default")]
    pub item_type: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub post_id: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub post_type: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub network: String,
    /// Type-specific payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateOffchainPostRequest {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<i64>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::wire::null_as_default"
    )]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::wire::null_as_default"
    )]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionStatus {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub subscribed: bool,
}

/// Treasury bounty as shown on its post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounty {
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub bounty_id: i64,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub proposer: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub value: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub fee: String,
    #[serde(deserialize_with = "crate::wire::null_as_default")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curator_deposit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bond: Option<String>,
}
