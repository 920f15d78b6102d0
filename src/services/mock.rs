//! Fixed fallback result set.

use crate::models::RawResult;

fn item(title: &str, link: &str, snippet: &str) -> RawResult {
    RawResult {
        title: title.to_string(),
        link: link.to_string(),
        snippet: snippet.to_string(),
    }
}

/// The result set served when the live search cannot be performed:
/// missing credentials, transport failure, or zero items returned.
/// Deterministic so downstream behavior stays testable offline.
pub fn mock_results() -> Vec<RawResult> {
    vec![
        item(
            "Google AI Hackathon 2026 - Build with Gemini | Unstop",
            "https://unstop.com/hackathons/google-ai-hackathon-2026",
            "Google AI Hackathon 2026 is now open! Build innovative AI solutions using Gemini API. Open to all students and developers. Eligibility: 18+ years, any background. Teams of 1-4 members. Prizes: ₹10 Lakhs + Google Cloud credits. Posted: January 5, 2026. Deadline: February 15, 2026.",
        ),
        item(
            "Smart India Hackathon 2026 - Grand Finale | SIH",
            "https://www.sih.gov.in/",
            "Smart India Hackathon 2026 Grand Finale registrations open! Software and Hardware editions. Eligibility: Students enrolled in recognized institutions, teams of 6. Problem statements released January 2026. Internal hackathons: Feb-March 2026. Grand Finale: April 2026.",
        ),
        item(
            "HackWithInfy 2026 Season 5 - Infosys | Unstop",
            "https://unstop.com/hackathons/hackwithinfy-2026",
            "HackWithInfy Season 5 is live! Infosys flagship hackathon for engineering students. Eligibility: 2025/2026/2027 graduating B.E/B.Tech/M.E/M.Tech/MCA with 60%+ aggregate. Coding round: February 2026. Hackathon round: March 2026. Posted: January 8, 2026. Apply by: January 25, 2026.",
        ),
        item(
            "Microsoft Imagine Cup 2026 India Finals | Microsoft",
            "https://imaginecup.microsoft.com/india",
            "Microsoft Imagine Cup 2026 India Round is accepting submissions! Categories: AI for Good, Gaming, Mixed Reality. Eligibility: Students 16+, teams up to 4. Build solutions addressing UN SDGs. India regional deadline: February 28, 2026. Winners advance to World Finals with $100K prize. Posted: December 20, 2025.",
        ),
        item(
            "Flipkart GRiD 6.0 - Engineering Challenge 2026 | Flipkart Careers",
            "https://unstop.com/hackathons/flipkart-grid-6",
            "Flipkart GRiD 6.0 registrations now open! India's biggest engineering campus challenge. Eligibility: B.E/B.Tech students graduating 2025/2026/2027, all branches. Level 1: Online test (Jan 20-25, 2026). Level 2: Hackathon (February 2026). Prizes: ₹5 Lakhs + PPIs. Posted: January 10, 2026.",
        ),
        item(
            "ETHIndia 2026 - Devfolio | Ethereum Foundation",
            "https://devfolio.co/ethindia2026",
            "ETHIndia 2026 applications are open! India's largest Ethereum hackathon. 36-hour in-person event in Bangalore. Eligibility: Developers, designers, blockchain enthusiasts 18+. No prior blockchain experience needed. Mentorship from Ethereum Foundation. Event dates: March 14-16, 2026. Apply by: February 10, 2026.",
        ),
        item(
            "MLH Season 2026 India Region - Major League Hacking",
            "https://mlh.io/seasons/2026/events",
            "Major League Hacking Season 2026 India events starting! HackNITR (Jan 24-26), VITHack (Feb 7-9), HackOdisha (Feb 21-23), PesHack (Mar 7-9). Open to all students. Free participation, travel reimbursements available. Build projects in 24-36 hours. MLH swag, prizes, and networking. Register on individual event pages.",
        ),
        item(
            "TCS CodeVita Season 12 - Global Coding Contest | TCS",
            "https://unstop.com/competitions/tcs-codevita-season-12",
            "TCS CodeVita Season 12 is live! World's largest coding competition. Pre-Qualifier: January 15-20, 2026. Round 1: February 2026. Round 2: March 2026. Grand Finale: April 2026. Eligibility: Students graduating 2025/2026/2027, all branches. Individual participation. Cash prizes + job interview opportunities. Posted: January 2, 2026.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_set_is_fixed() {
        let results = mock_results();
        assert_eq!(results.len(), 8);
        assert_eq!(results, mock_results());
        assert!(results.iter().all(|r| !r.link.is_empty()));
    }
}
