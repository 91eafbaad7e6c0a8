//! Literal paper, diagram and saved-search records.

use chrono::NaiveDate;

use crate::models::{Diagram, FilterCriteria, DateRange, NumericRange, Paper, PerformanceMetrics, SavedSearch};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn record(
    id: &str,
    title: &str,
    authors: &[&str],
    venue: &str,
    published: NaiveDate,
    category: &str,
) -> Paper {
    Paper {
        id: id.to_string(),
        title: title.to_string(),
        authors: strings(authors),
        venue: venue.to_string(),
        published,
        category: category.to_string(),
        tags: Vec::new(),
        institutions: Vec::new(),
        citations: 0,
        downloads: 0,
        rating: 0.0,
        impact_factor: None,
        is_open_access: false,
        has_code: false,
        abstract_text: String::new(),
        quick_summary: None,
        tldr: None,
        key_findings: Vec::new(),
        methodology: None,
        results: None,
        conclusions: None,
        sample_size: None,
        metrics: None,
        doi: None,
        paper_url: None,
        github_url: None,
        pdf_url: None,
    }
}

/// Dashboard discovery set.
#[must_use]
pub fn discovery_papers() -> Vec<Paper> {
    vec![
        Paper {
            tags: strings(&["NLP", "Transformers", "Deep Learning", "Neural Networks"]),
            citations: 127,
            downloads: 2340,
            rating: 4.8,
            is_open_access: true,
            has_code: true,
            abstract_text: "This paper presents a comprehensive analysis of transformer architectures in natural language processing, examining their effectiveness across various tasks including text classification, machine translation, and sentiment analysis. The research demonstrates significant improvements in performance metrics compared to traditional RNN-based approaches, with particular emphasis on attention mechanisms and their role in capturing long-range dependencies in textual data.".to_string(),
            quick_summary: Some("Comprehensive analysis of transformer architectures showing 23% improvement over RNN models in NLP tasks.".to_string()),
            key_findings: strings(&[
                "Transformer models outperform RNNs by 23% on average",
                "Attention mechanisms crucial for long-range dependencies",
                "Computational efficiency improved by 40%",
            ]),
            github_url: Some("https://github.com/research/transformer-nlp".to_string()),
            pdf_url: Some("https://example.com/paper1.pdf".to_string()),
            ..record(
                "disc_1",
                "Transformer Architecture for Natural Language Processing: A Comprehensive Analysis",
                &["Dr. Sarah Chen", "Prof. Michael Rodriguez", "Dr. Emily Watson"],
                "Nature Machine Intelligence",
                date(2024, 1, 15),
                "Machine Learning",
            )
        },
        Paper {
            tags: strings(&["Quantum", "Cryptography", "Security", "Algorithms"]),
            citations: 89,
            downloads: 1876,
            rating: 4.6,
            abstract_text: "An in-depth exploration of quantum computing's impact on modern cryptographic systems, analyzing both threats and opportunities presented by quantum algorithms. The study evaluates post-quantum cryptographic methods and their implementation challenges, providing a roadmap for transitioning to quantum-resistant security protocols.".to_string(),
            quick_summary: Some("Analysis of quantum computing threats to cryptography with proposed quantum-resistant solutions.".to_string()),
            key_findings: strings(&[
                "Current RSA encryption vulnerable to quantum attacks",
                "Post-quantum algorithms show 15% performance overhead",
                "Implementation timeline critical for security transition",
            ]),
            pdf_url: Some("https://example.com/paper2.pdf".to_string()),
            ..record(
                "disc_2",
                "Quantum Computing Applications in Cryptography: Security Implications and Future Directions",
                &["Dr. James Liu", "Prof. Anna Kowalski"],
                "IEEE Quantum Engineering",
                date(2024, 1, 10),
                "Quantum Computing",
            )
        },
        Paper {
            tags: strings(&["Climate Change", "Marine Biology", "Machine Learning", "Ecosystems"]),
            citations: 156,
            downloads: 3210,
            rating: 4.9,
            is_open_access: true,
            has_code: true,
            abstract_text: "This research applies advanced machine learning techniques to analyze climate change impacts on marine ecosystems, utilizing satellite data and oceanographic measurements spanning two decades. The study reveals concerning trends in marine biodiversity and proposes predictive models for ecosystem management and conservation strategies.".to_string(),
            quick_summary: Some("ML analysis reveals 30% decline in marine biodiversity with predictive conservation models.".to_string()),
            key_findings: strings(&[
                "30% decline in marine species diversity over 20 years",
                "Temperature rise correlates with ecosystem disruption",
                "ML models achieve 85% accuracy in biodiversity prediction",
            ]),
            github_url: Some("https://github.com/marine-research/climate-ml".to_string()),
            pdf_url: Some("https://example.com/paper3.pdf".to_string()),
            ..record(
                "disc_3",
                "Climate Change Impact on Marine Ecosystems: A Machine Learning Approach",
                &["Dr. Maria Santos", "Prof. David Thompson", "Dr. Lisa Park"],
                "Environmental Science & Technology",
                date(2024, 1, 8),
                "Environmental Science",
            )
        },
        Paper {
            tags: strings(&["Blockchain", "Healthcare", "Privacy", "Interoperability"]),
            citations: 73,
            downloads: 1654,
            rating: 4.4,
            is_open_access: true,
            abstract_text: "A comprehensive study examining blockchain implementation in healthcare systems, focusing on patient data privacy, security protocols, and system interoperability challenges. The research presents a novel framework for secure health data exchange while maintaining patient privacy and regulatory compliance across different healthcare providers.".to_string(),
            quick_summary: Some("Blockchain framework for healthcare data exchange with enhanced privacy and security.".to_string()),
            key_findings: strings(&[
                "99.7% data integrity maintained across systems",
                "50% reduction in data breach incidents",
                "Interoperability improved by 60%",
            ]),
            pdf_url: Some("https://example.com/paper4.pdf".to_string()),
            ..record(
                "disc_4",
                "Blockchain Technology in Healthcare: Privacy, Security, and Interoperability",
                &["Dr. Robert Kim", "Prof. Jennifer Adams"],
                "Journal of Medical Internet Research",
                date(2024, 1, 5),
                "Healthcare Technology",
            )
        },
        Paper {
            tags: strings(&["Renewable Energy", "Smart Grid", "Optimization", "Sustainability"]),
            citations: 94,
            downloads: 2187,
            rating: 4.7,
            has_code: true,
            abstract_text: "This paper investigates advanced smart grid technologies for optimal integration of renewable energy sources, addressing challenges in grid stability, energy storage, and demand management. The study proposes innovative algorithms for real-time grid optimization and demonstrates significant improvements in energy efficiency and system reliability.".to_string(),
            quick_summary: Some("Smart grid optimization algorithms improve renewable energy integration by 35%.".to_string()),
            key_findings: strings(&[
                "35% improvement in renewable energy integration",
                "Grid stability maintained with 90% renewable sources",
                "Energy storage efficiency increased by 25%",
            ]),
            github_url: Some("https://github.com/smart-grid/optimization".to_string()),
            pdf_url: Some("https://example.com/paper5.pdf".to_string()),
            ..record(
                "disc_5",
                "Renewable Energy Grid Integration: Smart Grid Technologies and Optimization",
                &["Dr. Ahmed Hassan", "Prof. Catherine Miller", "Dr. Yuki Tanaka"],
                "IEEE Transactions on Smart Grid",
                date(2024, 1, 3),
                "Energy Systems",
            )
        },
        Paper {
            tags: strings(&["AI", "Drug Discovery", "Pharmaceuticals", "Molecular Biology"]),
            citations: 201,
            downloads: 4532,
            rating: 4.9,
            is_open_access: true,
            has_code: true,
            abstract_text: "An extensive analysis of AI applications in pharmaceutical research, examining machine learning models for drug target identification, molecular design, and clinical trial optimization. The research demonstrates how AI technologies can significantly reduce drug development timelines while improving success rates in clinical trials.".to_string(),
            quick_summary: Some("AI reduces drug discovery timeline by 40% with 60% higher success rates in trials.".to_string()),
            key_findings: strings(&[
                "40% reduction in drug discovery timeline",
                "60% higher success rates in clinical trials",
                "AI models identify novel drug targets with 78% accuracy",
            ]),
            github_url: Some("https://github.com/pharma-ai/drug-discovery".to_string()),
            pdf_url: Some("https://example.com/paper6.pdf".to_string()),
            ..record(
                "disc_6",
                "Artificial Intelligence in Drug Discovery: Accelerating Pharmaceutical Research",
                &["Dr. Priya Sharma", "Prof. Mark Johnson", "Dr. Elena Volkov"],
                "Nature Drug Discovery",
                date(2023, 12, 28),
                "Pharmaceutical Research",
            )
        },
    ]
}

/// Advanced search result set.
#[must_use]
pub fn search_papers() -> Vec<Paper> {
    vec![
        Paper {
            institutions: strings(&["Stanford University", "MIT"]),
            citations: 245,
            impact_factor: Some(4.8),
            abstract_text: "This comprehensive survey examines the latest deep learning methodologies applied to natural language processing tasks, including transformer architectures, attention mechanisms, and their applications in text generation, sentiment analysis, and machine translation.".to_string(),
            ..record(
                "search_1",
                "Deep Learning Approaches for Natural Language Processing: A Comprehensive Survey",
                &["Dr. Sarah Chen", "Prof. Michael Rodriguez", "Dr. Emily Watson"],
                "Journal of Artificial Intelligence Research",
                date(2024, 1, 15),
                "Machine Learning",
            )
        },
        Paper {
            institutions: strings(&["ETH Zurich", "Oxford University"]),
            citations: 189,
            impact_factor: Some(5.2),
            abstract_text: "An analysis of quantum computing's impact on modern cryptographic systems, exploring both the threats posed by quantum algorithms and the opportunities for quantum-resistant encryption methods.".to_string(),
            ..record(
                "search_2",
                "Quantum Computing Applications in Cryptography: Current State and Future Prospects",
                &["Dr. James Liu", "Prof. Anna Kowalski"],
                "Nature Quantum Information",
                date(2024, 2, 3),
                "Quantum Computing",
            )
        },
        Paper {
            institutions: strings(&["UC Berkeley", "Carnegie Mellon University"]),
            citations: 156,
            impact_factor: Some(6.1),
            abstract_text: "This research presents breakthrough developments in lithium-ion battery technology and alternative energy storage solutions, focusing on sustainability, efficiency, and scalability for renewable energy integration.".to_string(),
            ..record(
                "search_3",
                "Sustainable Energy Storage Solutions: Advances in Battery Technology",
                &["Dr. Maria Gonzalez", "Prof. David Kim", "Dr. Robert Thompson"],
                "Energy & Environmental Science",
                date(2024, 1, 28),
                "Energy Systems",
            )
        },
    ]
}

/// Papers available to the comparison tool.
#[must_use]
pub fn comparison_papers() -> Vec<Paper> {
    vec![
        Paper {
            citations: 342,
            methodology: Some("Systematic Literature Review".to_string()),
            sample_size: Some("150 studies analyzed".to_string()),
            key_findings: strings(&[
                "Transformer architectures show 23% improvement over traditional RNNs",
                "Pre-trained models reduce training time by 67% on average",
                "Multi-modal approaches achieve state-of-the-art results in 8/10 benchmarks",
            ]),
            conclusions: Some("The study demonstrates that modern deep learning approaches, particularly transformer-based architectures, have revolutionized natural language processing tasks. The integration of pre-trained models significantly reduces computational requirements while maintaining high performance across diverse applications.".to_string()),
            metrics: Some(PerformanceMetrics { accuracy: 94.2, precision: 91.8, recall: 93.5, f1_score: 92.6 }),
            abstract_text: "This comprehensive survey examines the evolution of deep learning methodologies in natural language processing from 2019 to 2024. We analyze 150 peer-reviewed studies to identify key trends, performance improvements, and emerging challenges in the field.".to_string(),
            ..record(
                "paper_1",
                "Deep Learning Approaches for Natural Language Processing: A Comprehensive Survey",
                &["Dr. Sarah Chen", "Prof. Michael Rodriguez", "Dr. Emily Watson"],
                "Nature Machine Intelligence",
                date(2024, 1, 1),
                "Machine Learning",
            )
        },
        Paper {
            citations: 189,
            methodology: Some("Experimental Analysis".to_string()),
            sample_size: Some("12 quantum algorithms tested".to_string()),
            key_findings: strings(&[
                "Shor's algorithm implementation reduces RSA-2048 factorization time by 99.8%",
                "Quantum key distribution achieves 99.99% security against eavesdropping",
                "Current quantum computers limited to 100-qubit operations for practical cryptography",
            ]),
            conclusions: Some("Quantum computing presents both unprecedented opportunities and significant threats to current cryptographic systems. While quantum algorithms can break traditional encryption, quantum cryptography offers theoretically unbreakable security protocols.".to_string()),
            metrics: Some(PerformanceMetrics { accuracy: 99.9, precision: 98.7, recall: 99.2, f1_score: 98.9 }),
            abstract_text: "This research investigates the practical applications of quantum computing in modern cryptographic systems, analyzing both the vulnerabilities it creates and the new security paradigms it enables through quantum key distribution and post-quantum cryptography.".to_string(),
            ..record(
                "paper_2",
                "Quantum Computing Applications in Cryptography: Security Implications and Future Directions",
                &["Prof. David Kim", "Dr. Lisa Zhang", "Dr. Robert Johnson"],
                "IEEE Transactions on Quantum Engineering",
                date(2024, 1, 1),
                "Quantum Computing",
            )
        },
        Paper {
            citations: 267,
            methodology: Some("Simulation and Field Testing".to_string()),
            sample_size: Some("5 smart grid networks, 10,000 households".to_string()),
            key_findings: strings(&[
                "ML-optimized grids reduce energy waste by 31% compared to traditional systems",
                "Predictive algorithms improve renewable energy integration by 45%",
                "Real-time optimization decreases peak demand by 22% during high-usage periods",
            ]),
            conclusions: Some("Machine learning algorithms significantly enhance smart grid efficiency and sustainability. The integration of predictive models with real-time optimization creates more resilient and environmentally friendly energy distribution systems.".to_string()),
            metrics: Some(PerformanceMetrics { accuracy: 87.3, precision: 89.1, recall: 85.7, f1_score: 87.4 }),
            abstract_text: "This study explores the application of machine learning techniques to optimize smart grid operations, focusing on energy efficiency, renewable integration, and demand response management across diverse urban and rural environments.".to_string(),
            ..record(
                "paper_3",
                "Sustainable Energy Systems: Machine Learning Optimization for Smart Grid Management",
                &["Dr. Maria Gonzalez", "Prof. James Wilson", "Dr. Aisha Patel"],
                "Energy and Environmental Science",
                date(2023, 1, 1),
                "Energy Systems",
            )
        },
    ]
}

/// Paper shown on the detail view.
#[must_use]
pub fn showcase_paper() -> Paper {
    Paper {
        tags: strings(&["Neural Networks", "Attention Mechanism", "NLP", "Deep Learning"]),
        citations: 89_247,
        doi: Some("10.48550/arXiv.1706.03762".to_string()),
        abstract_text: "The dominant sequence transduction models are based on complex recurrent or convolutional neural networks that include an encoder and a decoder. The best performing models also connect the encoder and decoder through an attention mechanism. We propose a new simple network architecture, the Transformer, based solely on attention mechanisms, dispensing with recurrence and convolutions entirely.\n\nExperiments on two machine translation tasks show that these models are superior in quality while being more parallelizable and requiring significantly less time to train. Our model achieves 28.4 BLEU on the WMT 2014 English-to-German translation task, improving over the existing best results, including ensembles, by over 2 BLEU.".to_string(),
        tldr: Some("This paper introduces the Transformer architecture, a novel neural network model that relies entirely on attention mechanisms without recurrent or convolutional layers, achieving state-of-the-art performance in machine translation tasks while being more efficient to train.".to_string()),
        key_findings: strings(&[
            "Transformer architecture eliminates the need for recurrent and convolutional layers in sequence-to-sequence models",
            "Self-attention mechanism allows for better parallelization during training, reducing computational time significantly",
            "Achieved 28.4 BLEU score on WMT 2014 English-to-German translation, surpassing previous state-of-the-art by 2+ BLEU points",
            "Multi-head attention enables the model to focus on different representation subspaces simultaneously",
            "Positional encoding successfully replaces recurrence for handling sequence order information",
            "The model demonstrates superior performance on English-to-French translation with 41.8 BLEU score",
        ]),
        methodology: Some("The Transformer model consists of an encoder-decoder architecture where both components are composed of stacks of identical layers. The encoder contains six identical layers, each with two sub-layers: a multi-head self-attention mechanism and a position-wise fully connected feed-forward network.\n\nThe decoder also contains six identical layers with an additional third sub-layer that performs multi-head attention over the output of the encoder stack. Residual connections are employed around each sub-layer, followed by layer normalization.".to_string()),
        results: Some("The model was evaluated on WMT 2014 English-to-German and English-to-French translation tasks. On English-to-German translation, the model achieved 28.4 BLEU, establishing a new state-of-the-art. On English-to-French translation, the model achieved 41.8 BLEU, again surpassing previous best results.".to_string()),
        paper_url: Some("https://arxiv.org/abs/1706.03762".to_string()),
        github_url: Some("https://github.com/tensorflow/tensor2tensor".to_string()),
        pdf_url: Some("https://arxiv.org/pdf/1706.03762.pdf".to_string()),
        has_code: true,
        is_open_access: true,
        ..record(
            super::SHOWCASE_ID,
            "Attention Is All You Need: Transformer Architecture for Natural Language Processing",
            &[
                "Ashish Vaswani",
                "Noam Shazeer",
                "Niki Parmar",
                "Jakob Uszkoreit",
                "Llion Jones",
                "Aidan N. Gomez",
                "Łukasz Kaiser",
                "Illia Polosukhin",
            ],
            "Advances in Neural Information Processing Systems",
            date(2017, 6, 12),
            "Machine Learning",
        )
    }
}

/// Diagrams held for the showcase paper.
#[must_use]
pub fn showcase_diagrams() -> Vec<Diagram> {
    vec![
        Diagram {
            id: 0,
            title: "Transformer Architecture Overview".to_string(),
            description: "Complete architecture showing encoder-decoder structure with attention mechanisms".to_string(),
            image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop".to_string(),
            kind: "Architecture".to_string(),
        },
        Diagram {
            id: 1,
            title: "Multi-Head Attention Mechanism".to_string(),
            description: "Detailed view of how multi-head attention processes input sequences".to_string(),
            image_url: "https://images.unsplash.com/photo-1518186285589-2f7649de83e0?w=800&h=600&fit=crop".to_string(),
            kind: "Mechanism".to_string(),
        },
        Diagram {
            id: 2,
            title: "Performance Comparison".to_string(),
            description: "BLEU score comparisons across different translation tasks".to_string(),
            image_url: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=600&fit=crop".to_string(),
            kind: "Results".to_string(),
        },
    ]
}

/// Saved searches present before the user saves any.
#[must_use]
pub fn saved_searches() -> Vec<SavedSearch> {
    vec![
        SavedSearch {
            id: "1".to_string(),
            name: "AI & Machine Learning Papers".to_string(),
            filters: FilterCriteria {
                keywords: "artificial intelligence machine learning".to_string(),
                categories: strings(&["Machine Learning", "Artificial Intelligence"]),
                date_range: DateRange::new("2023-01-01", "2024-12-31"),
                ..FilterCriteria::default()
            },
            result_count: 1247,
            last_used: date(2024, 1, 10),
        },
        SavedSearch {
            id: "2".to_string(),
            name: "Quantum Computing Research".to_string(),
            filters: FilterCriteria {
                keywords: "quantum computing algorithms".to_string(),
                categories: strings(&["Quantum Computing", "Computer Science"]),
                citation_range: NumericRange::new("50", ""),
                ..FilterCriteria::default()
            },
            result_count: 89,
            last_used: date(2024, 1, 8),
        },
    ]
}
