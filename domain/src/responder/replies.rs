//! Canned reply texts for the local responder.

pub const CAPITAL_FRANCE: &str = r#"🇫🇷 **Capital of France**

The capital of France is **Paris**.

**Key Information:**
• **City**: Paris
• **Population**: ~2.1 million (city), ~12 million (metro area)
• **Language**: French
• **Famous For**: Eiffel Tower, Louvre Museum, Notre-Dame, Champs-Élysées
• **Nickname**: "City of Light" (La Ville Lumière)

Paris is not only the capital but also the largest city and cultural center of France. It's known worldwide for its art, fashion, cuisine, and architecture.

*This is basic geographical knowledge that doesn't change frequently.*"#;

pub const CAPITAL_INDIA: &str = r#"🇮🇳 **Capital of India**

The capital of India is **New Delhi**.

**Key Information:**
• **City**: New Delhi
• **State**: Delhi (National Capital Territory)
• **Population**: ~32 million (metro area)
• **Language**: Hindi, English
• **Famous For**: Red Fort, India Gate, Qutub Minar, Lotus Temple
• **Government**: Houses Parliament, Supreme Court, and major ministries

New Delhi serves as the political and administrative center of India, while Mumbai is the financial capital.

*This is basic geographical knowledge that doesn't change frequently.*"#;

pub const CAPITAL_USA: &str = r#"🇺🇸 **Capital of USA**

The capital of the United States is **Washington, D.C.**

**Key Information:**
• **City**: Washington, D.C. (District of Columbia)
• **Population**: ~700,000 (city), ~6.3 million (metro area)
• **Language**: English
• **Famous For**: White House, Capitol Building, Lincoln Memorial, Washington Monument
• **Government**: Houses all three branches of federal government

Washington, D.C. is the political center of the United States, while New York is the financial capital.

*This is basic geographical knowledge that doesn't change frequently.*"#;

pub const CAPITAL_CHINA: &str = r#"🇨🇳 **Capital of China**

The capital of China is **Beijing**.

**Key Information:**
• **City**: Beijing
• **Population**: ~21.5 million (metro area)
• **Language**: Mandarin Chinese
• **Famous For**: Forbidden City, Great Wall, Tiananmen Square, Temple of Heaven
• **Government**: Houses the central government and Communist Party headquarters

Beijing is the political, cultural, and educational center of China, while Shanghai is the financial capital.

*This is basic geographical knowledge that doesn't change frequently.*"#;

pub const LARGEST_COUNTRY: &str = r#"🌍 **Largest Country in the World**

**Russia** is the largest country in the world by land area.

**Key Information:**
• **Country**: Russia (Russian Federation)
• **Area**: ~17.1 million km² (6.6 million sq mi)
• **Population**: ~146 million
• **Capital**: Moscow
• **Spans**: 11 time zones across Europe and Asia
• **Borders**: 14 countries

Russia covers more than 1/8th of the Earth's inhabited land area and spans two continents.

*This is basic geographical knowledge that doesn't change frequently.*"#;

pub const POPULATION_INDIA: &str = r#"🇮🇳 **Population of India**

India has approximately **1.4 billion people** (as of 2024).

**Key Information:**
• **Population**: ~1.4 billion (1,400,000,000)
• **Rank**: 2nd most populous country in the world
• **Growth Rate**: ~0.7% annually
• **Density**: ~464 people per km²
• **Largest Cities**: Mumbai, Delhi, Bangalore, Kolkata, Chennai

India is expected to become the world's most populous country by 2027, surpassing China.

*Population figures are estimates and change over time.*"#;

pub const POPULATION_CHINA: &str = r#"🇨🇳 **Population of China**

China has approximately **1.4 billion people** (as of 2024).

**Key Information:**
• **Population**: ~1.4 billion (1,400,000,000)
• **Rank**: 1st most populous country in the world
• **Growth Rate**: ~0.1% annually (slowing)
• **Density**: ~153 people per km²
• **Largest Cities**: Shanghai, Beijing, Chongqing, Tianjin, Guangzhou

China has the world's largest population, though India is expected to surpass it soon.

*Population figures are estimates and change over time.*"#;

pub const LARGEST_OCEAN: &str = r#"🌊 **Largest Ocean in the World**

The **Pacific Ocean** is the largest ocean in the world.

**Key Information:**
• **Ocean**: Pacific Ocean
• **Area**: ~165.2 million km² (63.8 million sq mi)
• **Covers**: ~46% of Earth's water surface
• **Depth**: Average 4,280 meters (14,040 feet)
• **Deepest Point**: Mariana Trench (11,034 meters)

The Pacific Ocean is larger than all land masses combined and contains more than half of Earth's free water.

*This is basic geographical knowledge that doesn't change frequently.*"#;

pub const PRIME_MINISTER_INDIA: &str = r#"🇮🇳 **Prime Minister of India**

As of 2024, **Narendra Modi** is the Prime Minister of India. He has been serving as the 14th Prime Minister since May 26, 2014, and was re-elected for a second term in 2019.

**Key Information:**
• **Name**: Narendra Damodardas Modi
• **Party**: Bharatiya Janata Party (BJP)
• **Term**: 2014-present (2nd term)
• **Previous Role**: Chief Minister of Gujarat (2001-2014)

For the most current and detailed information, I recommend checking official government websites or recent news sources. 📰

*Note: Political information can change, so always verify with current sources.*"#;

pub const PRESIDENT_USA: &str = r#"🇺🇸 **President of the United States**

As of 2024, **Joe Biden** is the President of the United States. He has been serving as the 46th President since January 20, 2021.

**Key Information:**
• **Name**: Joseph Robinette Biden Jr.
• **Party**: Democratic Party
• **Term**: 2021-present
• **Previous Role**: Vice President (2009-2017), U.S. Senator (1973-2009)

For the most current and detailed information, I recommend checking official government websites or recent news sources. 📰

*Note: Political information can change, so always verify with current sources.*"#;

pub const CURRENT_INFO: &str = r#"🔍 **Current Information Search**

I can help you find the most current information! For real-time data like:
- Current Prime Minister of India
- Latest news and updates
- Today's weather
- Stock prices
- Recent events

I'll search the web for the most up-to-date information. Let me know what specific current information you need! 📰"#;

pub const GREETINGS: &[&str] = &[
    "Hello there! 👋 I'm your AI assistant with Google search capabilities, and I'm excited to help you today! What can I do for you?",
    "Hi! Great to meet you! I can help with any questions, search for current information, or just chat. What's on your mind?",
    "Hey! I'm ready and eager to assist you with both AI responses and real-time search. How can I make your day better?",
    "Good to see you! I'm your intelligent assistant with web search, ready to help with anything you need. What would you like to know?",
];

pub const WELL_BEING: &[&str] = &[
    "I'm doing absolutely fantastic, thank you for asking! I'm energized and ready to help you with both AI responses and real-time search. How are you doing today?",
    "I'm wonderful! I love helping people like you and I'm always excited to learn, assist, and search for current information. What can I help you with?",
    "I'm excellent! I'm here 24/7 and always ready to chat, help, provide information, and search the web. How can I make your day better?",
    "I'm doing great! I'm constantly learning and improving, and I'm thrilled to be able to help you with both AI and search capabilities. What do you need assistance with?",
];

pub const CAPABILITIES: &str = r#"I'm your advanced AI assistant with Google-level intelligence! Here's what I excel at:

🧠 **Intelligent Assistance:**
• Answer complex questions with detailed explanations
• Help with problem-solving and critical thinking
• Provide creative solutions and ideas
• Explain difficult concepts in simple terms
• Offer insights and analysis

🔍 **Real-Time Information:**
• Current news and events
• Political leaders and government updates
• Latest weather, stocks, and prices
• Recent discoveries and breakthroughs
• Up-to-date facts and data

💬 **Natural Conversation:**
• Engaging, intelligent dialogue
• Context-aware responses
• Adapt to your communication style
• Friendly and helpful personality
• Remember our conversation flow

🎯 **Knowledge Areas:**
• Science and technology
• History and culture
• Business and economics
• Creative writing and arts
• Learning and education
• Current events and news
• General knowledge and facts

🚀 **Advanced Capabilities:**
• Complex reasoning and analysis
• Creative problem-solving
• Multi-step task planning
• Research and fact-checking
• Code review and programming help
• Real-time information gathering
• Creative writing and storytelling

What would you like to explore or discuss? I'm here to help you discover and learn! 😊"#;

pub const PROFESSIONAL: &str = r#"💼 **Professional & Business Help:**

I can assist you with various business and career topics:

**Career Development:**
• Resume and cover letter writing
• Interview preparation and tips
• Career planning and goal setting
• Professional networking strategies
• Skill development recommendations

**Business Operations:**
• Business planning and strategy
• Marketing and branding advice
• Financial planning and budgeting
• Team management and leadership
• Process optimization

**Professional Skills:**
• Communication and presentation
• Project management
• Problem-solving techniques
• Time management and productivity
• Industry-specific knowledge

**Current Business Information:**
• Latest industry news and trends
• Market updates and analysis
• Company information and updates
• Economic indicators and reports

What specific aspect of your professional life would you like help with? I'm here to provide detailed, actionable advice! 🚀"#;

pub const TECHNICAL: &str = r#"💻 **Technical Assistance:**

I can help you with a wide range of technical topics:

**Programming & Development:**
• Code review and optimization
• Debugging and troubleshooting
• Best practices and design patterns
• Framework and library recommendations
• Architecture and system design

**Software & Tools:**
• Software recommendations
• Configuration and setup help
• Performance optimization
• Security best practices
• Integration and automation

**Learning & Skills:**
• Programming language guidance
• Technology stack advice
• Learning path recommendations
• Project planning and management
• Industry trends and updates

**Current Tech Information:**
• Latest technology news
• Software updates and releases
• Security alerts and patches
• Industry developments

What technical challenge are you facing? I'd love to help you solve it! 🔧"#;

pub const CREATIVE: &str = r#"✍️ **Creative & Writing Help:**

I love helping with creative projects! Here's what I can do:

**Writing Assistance:**
• Creative writing and storytelling
• Blog posts and articles
• Marketing copy and content
• Technical documentation
• Poetry and creative expression

**Content Strategy:**
• Content planning and ideation
• Audience targeting and engagement
• SEO and optimization tips
• Social media content
• Brand voice development

**Creative Projects:**
• Brainstorming and ideation
• Character and plot development
• Creative problem-solving
• Design thinking
• Innovation and inspiration

**Current Creative Information:**
• Latest trends in writing and content
• Popular topics and themes
• Creative industry updates
• Inspiration and ideas

What kind of creative project are you working on? I'm excited to help bring your ideas to life! 🎨"#;

pub const LEARNING: &str = r#"📚 **Learning & Education Support:**

I'm passionate about helping you learn and grow! Here's how I can assist:

**Learning Support:**
• Explain complex topics simply
• Create study guides and summaries
• Provide practice questions and examples
• Break down difficult concepts
• Offer multiple learning approaches

**Subject Areas:**
• Science and mathematics
• History and social studies
• Languages and literature
• Technology and programming
• Business and economics
• Arts and humanities

**Study Strategies:**
• Effective study techniques
• Memory and retention tips
• Time management for learning
• Note-taking strategies
• Test preparation methods

**Current Educational Information:**
• Latest educational resources
• Recent research and studies
• Educational technology updates
• Learning trends and methods

What would you like to learn about? I'll make it engaging and easy to understand! 🎓"#;

pub const PROBLEM_SOLVING: &str = r#"🔧 **Problem-Solving Support:**

I love tackling challenges! Here's how I can help:

**Problem Analysis:**
• Break down complex problems
• Identify root causes and patterns
• Analyze different perspectives
• Consider multiple solutions
• Evaluate pros and cons

**Solution Strategies:**
• Creative problem-solving techniques
• Step-by-step action plans
• Resource identification
• Risk assessment and mitigation
• Implementation guidance

**Support Areas:**
• Technical troubleshooting
• Personal and professional challenges
• Decision-making processes
• Conflict resolution
• Process improvement

**Current Problem-Solving Resources:**
• Latest tools and techniques
• Industry best practices
• Case studies and examples
• Expert insights and advice

What problem are you facing? Let's work through it together and find the best solution! 💡"#;

pub const GRATITUDE: &[&str] = &[
    "You're very welcome! I'm thrilled I could help you. Is there anything else you'd like to explore or discuss? 😊",
    "My absolute pleasure! I love helping people like you. What else can I assist you with today? 🌟",
    "You're so welcome! That's exactly what I'm here for. Feel free to ask me anything else! ✨",
    "Anytime! I'm always excited to help. What other questions or topics would you like to dive into? 🤗",
];

pub const FAREWELLS: &[&str] = &[
    "Goodbye! It was wonderful chatting with you. Feel free to come back anytime - I'm always here to help! 👋",
    "See you later! I'm always here when you need assistance. Take care and have an amazing day! 😊",
    "Farewell! Thanks for the great conversation. Come back soon - I love helping you! 🌟",
    "Have a fantastic day! I'll be here whenever you need help or just want to chat! ✨",
];

pub const TELL_ME_MORE: &[&str] = &[
    "That's a fascinating question! I'd love to help you explore this topic in detail. Could you tell me more about what specific aspect you're most interested in?",
    "I'm excited to help with that! This sounds like something I can definitely assist you with. What additional context would help me give you the best possible answer?",
    "Great question! I'm always thrilled to help people like you. Can you provide more details about what you'd like to know or achieve?",
    "I'm listening and ready to help! That's exactly the kind of interesting challenge I enjoy tackling. What specific information would be most valuable for you?",
    "Absolutely! I love helping with questions like this. What additional details would help me provide you with the most comprehensive and useful response?",
    "Perfect! I'm here to help with exactly this kind of inquiry. What specific aspects would you like me to focus on or explain in detail?",
    "I'm all ears and excited to help! That's the kind of question I really enjoy working through. What additional context would help me give you the best answer?",
    "Excellent question! I'm here to help you get exactly what you need. What specific information or outcome are you looking for?",
];
