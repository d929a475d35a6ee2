//! Frequently asked questions and the accordion that shows them

/// A question and its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    /// Question text, always visible
    pub question: &'static str,
    /// Answer text, visible while the entry is open
    pub answer: &'static str,
}

/// Entries in display order
pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "What is an IMEI number and how do I find it?",
        answer: "The IMEI (International Mobile Equipment Identity) is a unique 15-digit number \
                 that identifies your specific mobile device. It's like a fingerprint for your \
                 phone. The easiest way to find it is by dialing *#06# on your phone's keypad. \
                 You can also find it in your phone's settings (usually under \"About Phone\" -> \
                 \"Status\") or printed on the original box.",
    },
    FaqEntry {
        question: "Can I report my stolen phone directly on this website?",
        answer: "No. To ensure the integrity and accuracy of our database, all reports must be \
                 filed in person at an authorized Nigerian Police station. This allows officers \
                 to verify proof of ownership and collect an official statement, which prevents \
                 fraudulent reports. We act as the central database for these verified police \
                 reports.",
    },
    FaqEntry {
        question: "Is there a fee to report a stolen phone?",
        answer: "Yes, there is a small administrative fee payable at the police station when you \
                 file an official report. This fee helps cover the costs of running and \
                 maintaining this secure national platform, ensuring it remains a reliable and \
                 long-term resource. The public IMEI check service, however, is always free.",
    },
    FaqEntry {
        question: "What should I do if a phone I'm about to buy is listed as stolen?",
        answer: "Do not proceed with the purchase. We advise you to thank the seller for their \
                 time and walk away. You can optionally and discreetly inform the seller that the \
                 device is flagged in the national database. For your own safety, do not attempt \
                 to confront the seller or confiscate the device yourself. You can report the \
                 encounter to the nearest police station if you feel it is safe to do so.",
    },
    FaqEntry {
        question: "What happens if my phone is recovered?",
        answer: "If your phone is recovered, you should return to the police station where you \
                 filed the initial report. They can update the status of your device in our \
                 system to \"Recovered.\" This will remove the \"stolen\" flag from your IMEI, \
                 allowing the device to be used or sold legally in the future.",
    },
];

/// Accordion with at most one entry open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    /// Open `index`, or close it if it is already open
    #[must_use]
    pub const fn toggle(self, index: usize) -> Self {
        let open = match self.open {
            Some(current) if current == index => None,
            _ => Some(index),
        };
        Self { open }
    }

    /// Whether entry `index` is expanded
    pub const fn is_open(self, index: usize) -> bool {
        matches!(self.open, Some(current) if current == index)
    }

    /// Index of the expanded entry
    pub const fn open_index(self) -> Option<usize> {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_five_entries() {
        assert_eq!(FAQ_ENTRIES.len(), 5);
        assert!(FAQ_ENTRIES.iter().all(|e| e.question.ends_with('?')));
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let faq = FaqAccordion::default().toggle(2);
        assert!(faq.is_open(2));
        assert!(!faq.toggle(2).is_open(2));
    }

    #[test]
    fn test_only_one_open() {
        let faq = FaqAccordion::default().toggle(0).toggle(3);
        assert_eq!(faq.open_index(), Some(3));
        assert!(!faq.is_open(0));
    }
}
