//! Lead store with fuzzy duplicate lookup.

use tracing::debug;

use super::edit_distance;
use crate::domain::{IdSequence, Lead, NewLead, ids};

/// Leads in insertion order.
#[derive(Debug, Default)]
pub struct LeadDeduplicator {
    leads: Vec<Lead>,
    ids: IdSequence<ids::Lead>,
}

impl LeadDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_lead(&mut self, lead: NewLead) -> &Lead {
        let id = self.ids.allocate();
        debug!(lead_id = %id, name = %lead.name, "lead added");
        self.leads.push(Lead::from_new(id, lead));
        &self.leads[self.leads.len() - 1]
    }

    /// Stored leads whose lowercase name or lowercase email is within
    /// `max_distance` edits of the probe's. Insertion order, no ranking.
    pub fn find_similar(&self, probe: &NewLead, max_distance: usize) -> Vec<&Lead> {
        let name = probe.name.to_lowercase();
        let email = probe.email.to_lowercase();
        let matches: Vec<&Lead> = self
            .leads
            .iter()
            .filter(|lead| {
                let by_name = edit_distance(&lead.name.to_lowercase(), &name);
                let by_email = edit_distance(&lead.email.to_lowercase(), &email);
                by_name.min(by_email) <= max_distance
            })
            .collect();
        debug!(probe = %probe.name, max_distance, found = matches.len(), "similar leads");
        matches
    }

    pub fn list_leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LeadId;
    use rstest::rstest;

    fn demo_crm() -> LeadDeduplicator {
        let mut crm = LeadDeduplicator::new();
        crm.add_lead(NewLead::new("Rohit Sharma", "rohit@xyz.com", "9876543210"));
        crm.add_lead(NewLead::new("Rahul Verma", "rahul.v@abc.in", "9898989898"));
        crm
    }

    fn ids(leads: &[&Lead]) -> Vec<u64> {
        leads.iter().map(|lead| lead.id.get()).collect()
    }

    #[test]
    fn add_lead_assigns_ids_in_order() {
        let crm = demo_crm();
        let stored: Vec<LeadId> = crm.list_leads().iter().map(|l| l.id).collect();
        assert_eq!(stored, vec![LeadId::new(1), LeadId::new(2)]);
        assert_eq!(crm.len(), 2);
    }

    #[rstest]
    #[case::exact_only(0, false)]
    #[case::one_edit(1, true)]
    #[case::two_edits(2, true)]
    fn one_letter_name_variant(#[case] max_distance: usize, #[case] included: bool) {
        let crm = demo_crm();
        let probe = NewLead::new("Rohit Sarma", "someone@else.org", "");
        let found = crm.find_similar(&probe, max_distance);
        assert_eq!(ids(&found).contains(&1), included);
    }

    #[test]
    fn email_match_alone_is_enough() {
        let crm = demo_crm();
        let probe = NewLead::new("Completely Different", "RAHUL.V@ABC.IN", "");
        assert_eq!(ids(&crm.find_similar(&probe, 0)), vec![2]);
    }

    #[test]
    fn comparison_ignores_case() {
        let crm = demo_crm();
        let probe = NewLead::new("ROHIT SHARMA", "nobody@nowhere", "");
        assert_eq!(ids(&crm.find_similar(&probe, 0)), vec![1]);
    }

    #[test]
    fn results_keep_insertion_order() {
        let mut crm = demo_crm();
        crm.add_lead(NewLead::new("Rohit Sarma", "rohit.sarma@xyz.com", "9000090000"));
        let probe = NewLead::new("Rohit Sarma", "rohit@xyz.com", "");
        // Lead 3 is an exact match and lead 1 is one edit away, yet lead 1 comes first.
        assert_eq!(ids(&crm.find_similar(&probe, 2)), vec![1, 3]);
    }

    #[test]
    fn no_match_returns_empty() {
        let crm = demo_crm();
        let probe = NewLead::new("Zed", "zed@zzz.zz", "");
        assert!(crm.find_similar(&probe, 2).is_empty());
    }

    #[test]
    fn empty_store_finds_nothing() {
        let crm = LeadDeduplicator::new();
        assert!(crm.is_empty());
        assert!(crm.find_similar(&NewLead::default(), 100).is_empty());
    }
}
