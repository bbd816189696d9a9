use super::prelude::*;
use crate::util::geocode::address_to_forward_query_string;

/// Which candidate of a geocoding response determines the position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CandidateSelection {
    First,
    /// The last candidate of the response wins.
    #[default]
    Last,
}

/// How to proceed if an address could not be resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnresolvedPolicy {
    /// Store the location without a position.
    #[default]
    Store,
    /// Fail and don't store anything.
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeoCodingPolicy {
    pub candidate_selection: CandidateSelection,
    pub unresolved: UnresolvedPolicy,
}

pub fn select_candidate(
    candidates: Vec<GeoCodingCandidate>,
    selection: CandidateSelection,
) -> Option<GeoCodingCandidate> {
    match selection {
        CandidateSelection::First => candidates.into_iter().next(),
        CandidateSelection::Last => candidates.into_iter().last(),
    }
}

pub fn try_resolve_address_position<G>(
    gateway: &G,
    addr: &Address,
    selection: CandidateSelection,
) -> std::result::Result<MapPoint, GeoCodingError>
where
    G: GeoCodingGateway + ?Sized,
{
    let query = address_to_forward_query_string(addr);
    if query.is_empty() {
        return Err(GeoCodingError::EmptyAddress);
    }
    let candidates = gateway.forward(&query)?;
    let candidate_count = candidates.len();
    let candidate =
        select_candidate(candidates, selection).ok_or(GeoCodingError::NoCandidates)?;
    log::debug!(
        "Resolved address '{}' to {} ({}, {} of {} candidate(s))",
        query,
        candidate.pos,
        candidate.formatted_address,
        match selection {
            CandidateSelection::First => "first",
            CandidateSelection::Last => "last",
        },
        candidate_count,
    );
    Ok(candidate.pos)
}

/// Resolves the position of an address according to the policy.
///
/// Returns `Ok(None)` if the address could not be resolved
/// and unresolved addresses are accepted.
pub fn resolve_address_position<G>(
    gateway: &G,
    addr: &Address,
    policy: &GeoCodingPolicy,
) -> Result<Option<MapPoint>>
where
    G: GeoCodingGateway + ?Sized,
{
    match try_resolve_address_position(gateway, addr, policy.candidate_selection) {
        Ok(pos) => Ok(Some(pos)),
        Err(err) => match policy.unresolved {
            UnresolvedPolicy::Store => {
                log::warn!("Storing location without position: {err}");
                Ok(None)
            }
            UnresolvedPolicy::Reject => {
                log::debug!("Rejecting unresolved address: {err}");
                Err(Error::Unresolved(err))
            }
        },
    }
}
