use chat_model::Category;

use crate::table::{CategoryEntry, ResponderConfig};

/// Built-in tables of the portfolio chatbot.
pub fn portfolio() -> ResponderConfig {
    ResponderConfig {
        categories: [
            (Category::Greeting, greeting()),
            (Category::Services, services()),
            (Category::Projects, projects()),
            (Category::Contact, contact()),
            (Category::Pricing, pricing()),
            (Category::Experience, experience()),
            (Category::Default, fallback()),
        ]
        .into_iter()
        .collect(),
    }
}

fn greeting() -> CategoryEntry {
    CategoryEntry::new(
        [
            "hello",
            "hi",
            "hey",
            "good morning",
            "good afternoon",
            "good evening",
        ],
        [
            "👋 Hi! I'm Tidiane, your Web Developer & Shopify Expert. How can I help you today?",
            "Hello! Welcome to my portfolio. I'm here to help you learn more about my services and projects!",
            "Hey there! 👋 I'm Tidiane, and I specialize in web development and Shopify solutions. What would you like to know?",
        ],
    )
}

fn services() -> CategoryEntry {
    CategoryEntry::new(
        ["service", "what do you do", "offer", "help"],
        [
            "🚀 I offer comprehensive web development services:\n\n\
             • Modern, responsive websites\n\
             • Custom Shopify e-commerce stores\n\
             • Front-end development (HTML5, CSS3, JavaScript, React, Vue.js)\n\
             • Back-end development (Node.js, PHP, Laravel)\n\
             • Database management (MySQL, MongoDB, PostgreSQL)\n\
             • Shopify theme customization and app integrations\n\
             • SEO optimization and performance tuning\n\n\
             Would you like to know more about any specific service?",
            "💼 My main services include:\n\n\
             ✅ Custom website development\n\
             ✅ Shopify store setup and optimization\n\
             ✅ E-commerce solutions\n\
             ✅ Technical support and maintenance\n\
             ✅ UI/UX design\n\
             ✅ Performance optimization\n\n\
             I work with modern technologies to create fast, secure, and scalable solutions. What type of project are you planning?",
        ],
    )
}

fn projects() -> CategoryEntry {
    CategoryEntry::new(
        ["project", "work", "portfolio", "show me"],
        [
            "🎯 Here are some of my featured projects:\n\n\
             1. **Charmemoda** - My Italian fashion brand e-commerce (Shopify)\n\
             2. **CrepsLockers** - Premium multi-category e-commerce platform\n\
             3. **AI Vision** - Modern AI company website\n\
             4. **Luxury Hotel** - Premium hospitality website\n\n\
             Each project showcases different aspects of my skills. Would you like to know more about a specific project?",
            "🌟 I've worked on various exciting projects:\n\n\
             • Fashion e-commerce (Charmemoda)\n\
             • Premium sneaker marketplace (CrepsLockers)\n\
             • AI technology websites\n\
             • Luxury hospitality sites\n\n\
             All projects are built with modern technologies and focus on user experience. Which project interests you most?",
        ],
    )
}

fn contact() -> CategoryEntry {
    CategoryEntry::new(
        ["contact", "email", "reach", "get in touch"],
        [
            "📧 You can reach me through:\n\n\
             • Email: tidianesoumah@icloud.com\n\
             • LinkedIn: linkedin.com/in/tidiane-soumah-567a6b2a8/\n\
             • Instagram: @tidisoumah\n\
             • GitHub: github.com/Tidisoumah10\n\n\
             I typically respond within 24 hours. What's your project about?",
            "🤝 Let's connect! Here are my contact details:\n\n\
             📧 tidianesoumah@icloud.com\n\
             💼 LinkedIn: Tidiane Soumah\n\
             📱 Instagram: @tidisoumah\n\
             💻 GitHub: Tidisoumah10\n\n\
             I'm always excited to discuss new projects and opportunities. What can I help you build?",
        ],
    )
}

fn pricing() -> CategoryEntry {
    CategoryEntry::new(
        // "pricing" does not contain "price"
        ["price", "pricing", "cost", "budget", "how much"],
        [
            "💰 Pricing depends on project complexity and requirements:\n\n\
             • Simple websites: Starting from €500\n\
             • Custom e-commerce: Starting from €1,500\n\
             • Shopify stores: Starting from €800\n\
             • Ongoing maintenance: €100-300/month\n\n\
             Each project is unique, so I provide custom quotes. Would you like to discuss your specific needs?",
            "💵 My pricing is competitive and transparent:\n\n\
             • Website development: €500-3,000\n\
             • Shopify stores: €800-2,500\n\
             • Custom applications: €1,000-5,000+\n\
             • Maintenance packages: €100-500/month\n\n\
             I offer free consultations to understand your needs and provide accurate quotes. What's your budget range?",
        ],
    )
}

fn experience() -> CategoryEntry {
    CategoryEntry::new(
        ["experience", "skill", "technology", "expertise"],
        [
            "🎓 I'm a Full-Stack Developer with expertise in:\n\n\
             • Front-end: HTML5, CSS3, JavaScript, React, Vue.js, TailwindCSS\n\
             • Back-end: Node.js, PHP, Laravel, Express.js\n\
             • Databases: MySQL, MongoDB, PostgreSQL\n\
             • E-commerce: Shopify (Liquid, theme development, app integration)\n\
             • Tools: Git, GitHub, automation tools, UI/UX design\n\n\
             I've worked on projects ranging from simple websites to complex e-commerce platforms. What technology stack interests you?",
            "💻 My technical background includes:\n\n\
             • 3+ years in web development\n\
             • Specialized in Shopify development\n\
             • Experience with modern frameworks and libraries\n\
             • Database design and optimization\n\
             • API development and integration\n\
             • Performance optimization and SEO\n\n\
             I stay updated with the latest technologies and best practices. What specific skills are you looking for?",
        ],
    )
}

fn fallback() -> CategoryEntry {
    CategoryEntry::new(
        Vec::<&str>::new(),
        [
            "I'm not sure I understand that. Could you try asking about my services, projects, or how to contact me?",
            "That's an interesting question! Could you be more specific? I can help with information about my services, projects, or contact details.",
            "I'd love to help! Try asking about my web development services, Shopify expertise, or check out my projects.",
            "Let me know if you'd like to learn about my services, see my projects, or get in touch with me!",
        ],
    )
}
