//! Canned replies for when the chat API is unreachable.
//!
//! Rules are checked in order against the lowercased question; the first rule
//! with any matching keyword wins, and the generic reply covers everything
//! else. A question hitting several buckets gets the earliest one.

/// One fallback rule: any keyword hit selects the reply.
struct FallbackRule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

const RULES: &[FallbackRule] = &[
    FallbackRule {
        keywords: &["service", "what do you do"],
        reply: "We offer comprehensive software development services including \
                web development, mobile apps, desktop software, and data science \
                solutions. We work with modern technologies like React, Node.js, \
                Python, and more to create custom solutions for your business needs.",
    },
    FallbackRule {
        keywords: &["price", "cost", "quote"],
        reply: "Our pricing is competitive and depends on project scope and \
                requirements. We offer custom quotes based on your specific needs. \
                Contact us at info@gocodesoftwares.com or +1 (234) 567-8900 for a \
                detailed consultation and quote.",
    },
    FallbackRule {
        keywords: &["contact", "reach"],
        reply: "You can reach us at info@gocodesoftwares.com or call us at \
                +1 (234) 567-8900. We're also available through our website's \
                contact form. We typically respond within 24 hours!",
    },
    FallbackRule {
        keywords: &["time", "how long"],
        reply: "Project timelines vary based on complexity and scope. Simple \
                websites might take 2-4 weeks, while complex applications can take \
                2-6 months. We'll provide a detailed timeline during our initial \
                consultation.",
    },
];

const DEFAULT_REPLY: &str =
    "I'm here to help you learn about goCode Softwares! We specialize in web \
     development, mobile apps, software solutions, and data science. Feel free \
     to ask about our services, pricing, or how we can help with your project. \
     You can also contact us directly at info@gocodesoftwares.com!";

/// Picks the canned reply for a question; first matching rule wins.
#[must_use]
pub fn canned_reply(question: &str) -> &'static str {
    let lowered = question.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map_or(DEFAULT_REPLY, |rule| rule.reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_bucket_matches_its_keywords() {
        assert!(canned_reply("What services do you offer?").contains("web development"));
        assert!(canned_reply("How much does it COST?").contains("custom quotes"));
        assert!(canned_reply("How can I reach you?").contains("24 hours"));
        assert!(canned_reply("How long will my project take?").contains("timelines"));
    }

    #[test]
    fn first_matching_rule_wins() {
        // "service" appears before "cost" in the rule order.
        let reply = canned_reply("what is the cost of your services");
        assert!(reply.contains("web development"));
    }

    #[test]
    fn unmatched_questions_get_the_generic_reply() {
        assert_eq!(canned_reply("tell me a joke"), DEFAULT_REPLY);
        assert_eq!(canned_reply(""), DEFAULT_REPLY);
    }
}
