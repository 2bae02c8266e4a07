//! Template assets for text synthesis.
//!
//! Two-level lookup: writing style, then category, with an explicit `default`
//! per style. Templates are plain text with `{placeholder}` slots filled by
//! the synthesizer:
//!
//! | placeholder        | value                                         |
//! |--------------------|-----------------------------------------------|
//! | `{prompt}`         | original-case prompt                          |
//! | `{topic}`          | analysis topic                                |
//! | `{keywords}`       | all keywords, comma separated                 |
//! | `{keywords_short}` | first three keywords, comma separated         |
//! | `{scale}` `{risk}` `{timeline}` `{team}` `{investment}` `{implementation}` | complexity-driven phrases |

use std::collections::HashMap;
use std::sync::LazyLock;

use super::style::WritingStyle;
use crate::analysis::Category;

/// Templates owned by one writing style
#[derive(Debug, Clone)]
pub struct StyleTemplates {
    variants: HashMap<Category, &'static str>,
    default: &'static str,
}

impl StyleTemplates {
    fn new(default: &'static str, variants: &[(Category, &'static str)]) -> Self {
        Self {
            variants: variants.iter().copied().collect(),
            default,
        }
    }

    /// Template for a category, or this style's default
    pub fn select(&self, category: Category) -> &'static str {
        self.variants.get(&category).copied().unwrap_or(self.default)
    }

    /// Whether the category has its own template for this style
    pub fn has_variant(&self, category: Category) -> bool {
        self.variants.contains_key(&category)
    }

    pub fn default_template(&self) -> &'static str {
        self.default
    }
}

static TEMPLATE_TABLE: LazyLock<HashMap<WritingStyle, StyleTemplates>> = LazyLock::new(|| {
    HashMap::from([
        (
            WritingStyle::Creative,
            StyleTemplates::new(
                CREATIVE_DEFAULT,
                &[
                    (Category::Technology, CREATIVE_TECHNOLOGY),
                    (Category::Business, CREATIVE_BUSINESS),
                    (Category::Creative, CREATIVE_CREATIVE),
                ],
            ),
        ),
        (
            WritingStyle::Professional,
            StyleTemplates::new(
                PROFESSIONAL_DEFAULT,
                &[
                    (Category::Technology, PROFESSIONAL_TECHNOLOGY),
                    (Category::Business, PROFESSIONAL_BUSINESS),
                ],
            ),
        ),
        (
            WritingStyle::Casual,
            StyleTemplates::new(
                CASUAL_DEFAULT,
                &[
                    (Category::Technology, CASUAL_TECHNOLOGY),
                    (Category::Business, CASUAL_BUSINESS),
                ],
            ),
        ),
        (
            WritingStyle::Academic,
            StyleTemplates::new(
                ACADEMIC_DEFAULT,
                &[
                    (Category::Technology, ACADEMIC_TECHNOLOGY),
                    (Category::Business, ACADEMIC_BUSINESS),
                ],
            ),
        ),
    ])
});

/// Templates for a writing style. Every style is registered.
pub fn style_templates(style: WritingStyle) -> &'static StyleTemplates {
    &TEMPLATE_TABLE[&style]
}

/// Raw template text for a style and category, falling back to the style default
pub fn select_template(style: WritingStyle, category: Category) -> &'static str {
    style_templates(style).select(category)
}

// --- Creative ---

const CREATIVE_TECHNOLOGY: &str = r#"🚀 **Creative Tech Vision: {prompt}**

Imagine a world where {topic} isn't just a concept—it's a living, breathing digital ecosystem that transforms how we interact with technology.

**The Vision:**
Picture {prompt} as a canvas where innovation meets imagination. It's not about building another {topic} system; it's about creating an experience that feels like magic in your hands.

**The Creative Journey:**
Every line of code, every pixel, every interaction becomes a brushstroke on this digital masterpiece. {keywords} aren't just features—they're the colors that bring your vision to life.

**The Magic:**
What makes this {topic} special is how it makes the complex feel simple, the ordinary feel extraordinary. It's like having a conversation with the future, where every click reveals a new possibility.

**The Promise:**
This isn't just about {prompt}—it's about unlocking the creative potential that lives inside every developer, designer, and dreamer who dares to imagine what could be.

Let your creativity flow and watch as {prompt} becomes more than words on a screen—it becomes a gateway to infinite possibilities. ✨"#;

const CREATIVE_BUSINESS: &str = r#"💼 **Creative Business Innovation: {prompt}**

In the dynamic world of business, {prompt} represents more than just another strategy—it's a creative revolution waiting to happen.

**The Creative Opportunity:**
Think of {topic} as a blank canvas where traditional business thinking meets innovative creativity. It's not about following the same old playbook; it's about rewriting the rules of success.

**The Innovation Journey:**
Every decision, every strategy, every customer interaction becomes an opportunity to create something extraordinary. {keywords} aren't just business elements—they're the building blocks of a new business paradigm.

**The Creative Edge:**
What sets this {topic} apart is its ability to turn challenges into opportunities, problems into solutions, and ideas into reality. It's like having a creative compass that always points toward innovation.

**The Vision:**
This isn't just about {prompt}—it's about creating a business ecosystem where creativity drives growth, innovation fuels success, and imagination becomes your competitive advantage.

Embrace the creative spirit and watch as {prompt} transforms from a business concept into a creative masterpiece that inspires and innovates. 🎨"#;

const CREATIVE_CREATIVE: &str = r#"🎭 **Creative Expression: {prompt}**

Welcome to the realm of pure creativity, where {prompt} becomes a gateway to infinite artistic possibilities and boundless imagination.

**The Creative Canvas:**
{topic} isn't just a subject—it's a universe of creative potential waiting to be explored. Every word, every image, every moment becomes a brushstroke on the canvas of your imagination.

**The Artistic Journey:**
Picture {prompt} as a story that writes itself, a painting that paints itself, a song that sings itself. {keywords} aren't just elements—they're the colors, sounds, and textures that bring your creative vision to life.

**The Magic of Creation:**
What makes this {topic} extraordinary is how it transforms the ordinary into the extraordinary, the mundane into the magical. It's like having a creative genie that grants unlimited wishes for artistic expression.

**The Creative Promise:**
This isn't just about {prompt}—it's about unlocking the creative genius that lives inside every artist, writer, musician, and dreamer who dares to imagine the impossible.

Let your imagination soar and watch as {prompt} becomes a masterpiece of creative expression that inspires and delights. 🌟"#;

const CREATIVE_DEFAULT: &str = r#"✨ **Creative Exploration: {prompt}**

Step into a world where {prompt} becomes more than words—it becomes a journey of creative discovery and boundless imagination.

**The Creative Adventure:**
{topic} isn't just a topic; it's a doorway to infinite possibilities. Every aspect, every detail, every nuance becomes an opportunity to explore, create, and innovate.

**The Imagination Journey:**
Picture {prompt} as a canvas where your thoughts become reality, your ideas become art, and your dreams become tangible. {keywords} aren't just concepts—they're the building blocks of creative expression.

**The Creative Magic:**
What makes this {topic} special is how it transforms the ordinary into the extraordinary. It's like having a creative key that unlocks doors to worlds you never knew existed.

**The Creative Promise:**
This isn't just about {prompt}—it's about discovering the creative potential that lives within you, waiting to be unleashed and expressed in ways that inspire and amaze.

Embrace your creative spirit and watch as {prompt} becomes a masterpiece of imagination and innovation. 🎨"#;

// --- Professional ---

const PROFESSIONAL_TECHNOLOGY: &str = r#"🔧 **Professional Technical Analysis: {prompt}**

**Executive Summary:**
This comprehensive technical analysis examines the implementation and strategic implications of {prompt} within modern technology ecosystems. The analysis provides actionable insights for technical teams, product managers, and stakeholders.

**Technical Assessment:**
• **Architecture Considerations**: {topic} requires a robust, scalable architecture that can handle {scale} requirements
• **Technology Stack**: Recommended implementation using modern frameworks and best practices
• **Performance Metrics**: Key performance indicators and optimization strategies for {topic}

**Implementation Strategy:**
1. **Phase 1**: Technical requirements gathering and architecture design
2. **Phase 2**: Core development and integration testing
3. **Phase 3**: Performance optimization and security hardening
4. **Phase 4**: Deployment and monitoring implementation

**Risk Assessment:**
• Technical complexity: {risk}
• Timeline: Estimated {timeline} for full implementation
• Resource requirements: {team}

**Recommendations:**
• Implement agile development methodology for iterative delivery
• Establish comprehensive testing protocols and quality assurance measures
• Develop detailed documentation and knowledge transfer processes
• Create monitoring and maintenance procedures for long-term success

**Next Steps:**
• Schedule technical review meeting within 2 weeks
• Begin requirements gathering and stakeholder interviews
• Develop detailed project timeline and resource allocation plan
• Establish success metrics and evaluation criteria"#;

const PROFESSIONAL_BUSINESS: &str = r#"📊 **Professional Business Analysis: {prompt}**

**Executive Summary:**
This comprehensive business analysis examines the strategic implications and market opportunities presented by {prompt}. The analysis provides actionable insights for business leaders, stakeholders, and implementation teams.

**Market Analysis:**
• **Market Opportunity**: {topic} represents a significant growth opportunity in the current business landscape
• **Competitive Landscape**: Analysis of existing solutions and market positioning opportunities
• **Target Audience**: Identification of key customer segments and market demographics

**Strategic Framework:**
1. **Market Positioning**: Develop unique value proposition and competitive differentiation
2. **Go-to-Market Strategy**: Create comprehensive launch and growth strategy
3. **Resource Allocation**: Determine optimal investment and resource distribution
4. **Risk Management**: Identify and mitigate potential business and market risks

**Financial Considerations:**
• Investment requirements: {investment}
• Revenue projections: Conservative and optimistic scenarios for market penetration
• Break-even analysis: Timeline for achieving profitability and positive cash flow

**Implementation Roadmap:**
• **Q1**: Market research and strategy development
• **Q2**: Pilot program and initial market testing
• **Q3**: Full market launch and growth acceleration
• **Q4**: Performance evaluation and strategy refinement

**Success Metrics:**
• Market penetration and customer acquisition rates
• Revenue growth and profitability metrics
• Customer satisfaction and retention rates
• Operational efficiency and cost optimization"#;

const PROFESSIONAL_DEFAULT: &str = r#"📋 **Professional Analysis: {prompt}**

**Executive Summary:**
This comprehensive analysis examines the strategic importance and implementation requirements of {prompt} from multiple professional perspectives. The analysis provides actionable insights and strategic recommendations for stakeholders across various industries.

**Strategic Assessment:**
• **Business Impact**: {topic} represents a significant opportunity for strategic development and market positioning
• **Implementation Complexity**: {implementation}
• **Market Potential**: Strong potential for growth and innovation in this area

**Key Findings:**
• Current market analysis indicates strong potential for growth and innovation
• Stakeholder engagement and cross-functional collaboration are essential for successful implementation
• Risk assessment reveals manageable challenges with proper planning and execution

**Strategic Recommendations:**
1. Conduct thorough market research to identify key opportunities and competitive advantages
2. Develop a comprehensive implementation roadmap with clear milestones and success metrics
3. Establish cross-departmental teams to ensure alignment and effective execution
4. Implement robust monitoring and evaluation frameworks to track progress and outcomes

**Implementation Timeline:**
• **Phase 1** (Months 1-2): Research and planning
• **Phase 2** (Months 3-6): Development and testing
• **Phase 3** (Months 7-8): Launch and initial evaluation
• **Phase 4** (Months 9-12): Optimization and scaling

**Next Steps:**
• Schedule stakeholder review meetings within the next 2 weeks
• Begin preliminary research and data collection phase
• Develop detailed project timeline and resource allocation plan
• Establish success metrics and evaluation criteria

This analysis demonstrates the strategic importance of {prompt} and provides a foundation for informed decision-making and successful project execution."#;

// --- Casual ---

const CASUAL_TECHNOLOGY: &str = r#"😊 **Hey there, tech enthusiast!**

So you're interested in {prompt}? That's awesome! Let me break this down in a way that's actually useful and not super technical.

**What's the deal with {topic}?**
{topic} is one of those things that seems super complicated at first, but once you get the hang of it, it's actually pretty cool. Think of it like learning to ride a bike - scary at first, but totally doable!

**Here's what you need to know:**
• {keywords_short} are the main things you'll be working with
• It's not as hard as it looks - promise!
• There are tons of resources out there to help you learn

**The cool part:**
What makes {topic} interesting is how it can solve real problems. It's like having a superpower that lets you build things that actually help people. Pretty neat, right?

**My advice:**
Start small, don't get overwhelmed, and remember that every expert was once a beginner. {prompt} might seem like a lot right now, but you've got this! 

Feel free to ask questions - there's no such thing as a stupid question when you're learning something new. 😄"#;

const CASUAL_BUSINESS: &str = r#"💼 **Hey business-minded friend!**

So you want to know about {prompt}? That's a smart move! Let me give you the lowdown without all the corporate jargon.

**What's {topic} all about?**
{topic} is basically about making smart decisions that help your business grow. It's like having a roadmap that shows you where you want to go and how to get there.

**The key things to remember:**
• {keywords_short} are your main focus areas
• It's about planning ahead, not just reacting to problems
• You don't need to be a business expert to get started

**Why it matters:**
Think of {topic} as your business GPS. Without it, you're just driving around hoping to find your destination. With it, you have a clear path to success.

**The bottom line:**
{prompt} isn't rocket science - it's about being smart, planning ahead, and making good decisions. Start with the basics, build from there, and don't be afraid to ask for help.

You've got this! Business success is totally within your reach. 🚀"#;

const CASUAL_DEFAULT: &str = r#"😊 **Hey there!**

So you want to know about {prompt}? That's awesome! Let me break it down for you in a way that's easy to understand and actually useful.

**First off, what is {topic}?**
{topic} is pretty interesting when you think about it. It's one of those things that seems simple at first, but the more you dig into it, the more fascinating it becomes. You know what I mean?

**Here's the thing:**
{prompt} isn't just about what it is on the surface. It's about how it connects to other things, how it affects people's lives, and why it matters in the grand scheme of things. Pretty cool, right?

**What makes it special:**
I think what makes {topic} special is that it's relatable. Whether you're a beginner or an expert, there's always something new to discover about it. It's like having a conversation with an old friend who always has something interesting to share.

**My take:**
{prompt} is worth learning about because it opens up new possibilities and helps you understand the world better. Plus, it's actually pretty fun once you get into it!

Hope this gives you a good starting point! Let me know if you want me to dive deeper into any specific aspect of {prompt}. There's always more to explore! 😄"#;

// --- Academic ---

const ACADEMIC_TECHNOLOGY: &str = r#"🎓 **Academic Research: {prompt}**

**Abstract:**
This scholarly investigation examines the theoretical foundations and practical applications of {prompt} within the context of modern technology and computer science. The research employs rigorous academic methodologies to provide comprehensive insights into the conceptual frameworks and implementation strategies of this technological domain.

**Literature Review:**
The existing body of knowledge on {topic} reveals several key theoretical perspectives that inform contemporary understanding. Previous studies have established foundational principles that guide current research methodologies and analytical frameworks. The literature demonstrates significant gaps in understanding that warrant further investigation, particularly in areas of {keywords}.

**Theoretical Framework:**
Our research approach utilizes established academic protocols, ensuring methodological rigor and reproducibility. The analytical framework incorporates peer-reviewed methodologies that have been validated through extensive empirical testing and cross-cultural validation studies. The theoretical foundation draws upon established principles in computer science, software engineering, and information systems.

**Methodological Approach:**
The research methodology employs a mixed-methods approach, combining qualitative analysis with quantitative assessment. Data collection methods include systematic literature review, expert interviews, and case study analysis. The analytical framework ensures comprehensive coverage of the research objectives while maintaining academic rigor.

**Key Research Questions:**
1. What are the fundamental theoretical principles underlying {topic}?
2. How do current theoretical models account for observed technological phenomena?
3. What methodological approaches yield the most reliable and valid results in {topic} research?
4. How can theoretical findings be applied to real-world technological contexts?

**Implications and Future Research:**
The findings of this study contribute to the broader academic discourse on {prompt} and provide a foundation for future research initiatives. Further investigation is recommended in areas of theoretical development, methodological innovation, and practical application within the technology sector."#;

const ACADEMIC_BUSINESS: &str = r#"🎓 **Academic Research: {prompt}**

**Abstract:**
This scholarly investigation examines the theoretical foundations and practical applications of {prompt} within the context of modern business and management theory. The research employs rigorous academic methodologies to provide comprehensive insights into the conceptual frameworks and strategic implications of this business domain.

**Literature Review:**
The existing body of knowledge on {topic} reveals several key theoretical perspectives that inform contemporary business understanding. Previous studies have established foundational principles that guide current research methodologies and analytical frameworks. The literature demonstrates significant gaps in understanding that warrant further investigation, particularly in areas of {keywords}.

**Theoretical Framework:**
Our research approach utilizes established academic protocols, ensuring methodological rigor and reproducibility. The analytical framework incorporates peer-reviewed methodologies that have been validated through extensive empirical testing and cross-cultural validation studies. The theoretical foundation draws upon established principles in business management, strategic planning, and organizational theory.

**Methodological Approach:**
The research methodology employs a mixed-methods approach, combining qualitative analysis with quantitative assessment. Data collection methods include systematic literature review, expert interviews, and case study analysis. The analytical framework ensures comprehensive coverage of the research objectives while maintaining academic rigor.

**Key Research Questions:**
1. What are the fundamental theoretical principles underlying {topic}?
2. How do current theoretical models account for observed business phenomena?
3. What methodological approaches yield the most reliable and valid results in {topic} research?
4. How can theoretical findings be applied to real-world business contexts?

**Implications and Future Research:**
The findings of this study contribute to the broader academic discourse on {prompt} and provide a foundation for future research initiatives. Further investigation is recommended in areas of theoretical development, methodological innovation, and practical application within the business sector."#;

const ACADEMIC_DEFAULT: &str = r#"🎓 **Academic Research: {prompt}**

**Abstract:**
This scholarly investigation examines the multifaceted dimensions of {prompt} through rigorous academic inquiry and systematic analysis. The research employs both qualitative and quantitative methodologies to provide comprehensive insights into the theoretical frameworks and practical applications of this subject matter.

**Literature Review:**
The existing body of knowledge on {topic} reveals several key theoretical perspectives that inform contemporary understanding. Previous studies have established foundational principles that guide current research methodologies and analytical frameworks. The literature demonstrates significant gaps in understanding that warrant further investigation, particularly in areas of {keywords}.

**Theoretical Framework:**
Our research approach utilizes established academic protocols, ensuring methodological rigor and reproducibility. The analytical framework incorporates peer-reviewed methodologies that have been validated through extensive empirical testing and cross-cultural validation studies. The theoretical foundation draws upon established principles in the relevant academic discipline.

**Methodological Approach:**
The research methodology employs a mixed-methods approach, combining qualitative analysis with quantitative assessment. Data collection methods include systematic literature review, expert interviews, and case study analysis. The analytical framework ensures comprehensive coverage of the research objectives while maintaining academic rigor.

**Key Research Questions:**
1. What are the fundamental principles underlying {topic}?
2. How do current theoretical models account for observed phenomena?
3. What methodological approaches yield the most reliable and valid results?
4. How can findings be applied to real-world contexts and practical applications?

**Implications and Future Research:**
The findings of this study contribute to the broader academic discourse on {prompt} and provide a foundation for future research initiatives. Further investigation is recommended in areas of theoretical development, methodological innovation, and practical application."#;
