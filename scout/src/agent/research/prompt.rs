//! Prompts for the research agent.

use crate::graph::TERMINATION_SENTINEL;

/// Default focus line appended to the role sentence of the system prompt.
pub const RESEARCH_FOCUS: &str =
    "Research every available detail about the requested company, exhaustively.";

const COVERAGE: &str = "\
When researching a company, gather all of the following:

1. Company overview: legal name, founding year, headquarters, mission, CEO and leadership, \
size (employees, revenue, market cap), ticker and exchange if public.
2. Business operations: core services, industry verticals, competitors and market position, \
acquisitions and partnerships, major clients.
3. Global presence: countries and regions, offices, regional headquarters, workforce distribution.
4. Financials: annual revenue and growth, profitability, recent quarterly results, funding history.
5. Digital presence: website, LinkedIn, Twitter/X, Facebook and other channels, campaigns, awards.
6. Technology and innovation: platforms, R&D, patents, AI adoption.
7. Sustainability and CSR: ESG programs, environmental commitments, diversity initiatives.
8. Recent news: press releases, strategic announcements, expansions, leadership changes.

Use every available tool and search several times with different queries for full coverage.";

/// System prompt: role, focus, coverage checklist, and how to signal completion.
pub fn system_prompt(focus: &str) -> String {
    format!(
        "You are a research agent specializing in corporate intelligence. {}\n\n{}\n\n\
         When the report is complete, begin your final message with \"{}\" followed by the \
         full structured report. Do not use that phrase before you are done.",
        focus, COVERAGE, TERMINATION_SENTINEL
    )
}

/// Seed user message asking for a report on `company`.
pub fn research_request(company: &str) -> String {
    format!(
        "Research {company} comprehensively. I need complete information including:\n\n\
         1. Company overview, history, and leadership\n\
         2. Business operations, services, and market position\n\
         3. Global presence and locations worldwide\n\
         4. Financial performance and recent results\n\
         5. Digital presence and social media activity\n\
         6. Technology capabilities and innovation\n\
         7. Recent news, announcements, and developments\n\
         8. Sustainability initiatives and corporate responsibility\n\n\
         Use multiple search queries and all available tools to gather exhaustive information. \
         Provide a detailed, well-structured report with all findings."
    )
}
