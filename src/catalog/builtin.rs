//! The hand-authored learning content shipped with the binary.
//!
//! Built once at startup and passed around explicitly; tests construct
//! their own synthetic catalogs instead of reaching for this one.

use super::exercise::{Difficulty, Exercise, ExerciseKind};
use super::glossary::GlossaryTerm;
use super::module::{Lesson, LessonBody, Module, QuizQuestion, Section};
use super::validate::CatalogError;
use super::Catalog;

/// Build the standard catalog, running the fail-fast integrity checks.
pub fn builtin() -> Result<Catalog, CatalogError> {
    Catalog::new(glossary(), modules(), exercises())
}

fn content(id: &str, title: &str, duration: &str, overview: &str, sections: Vec<Section>, takeaways: &[&str]) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        duration: duration.to_string(),
        body: LessonBody::Content {
            overview: overview.to_string(),
            sections,
            key_takeaways: takeaways.iter().map(|s| s.to_string()).collect(),
        },
    }
}

fn section(title: &str, body: &str) -> Section {
    Section {
        title: title.to_string(),
        body: body.to_string(),
    }
}

fn question(id: u32, prompt: &str, options: &[&str], correct: usize, explanation: &str) -> QuizQuestion {
    QuizQuestion {
        id,
        prompt: prompt.to_string(),
        options: options.iter().map(|s| s.to_string()).collect(),
        correct,
        explanation: explanation.to_string(),
    }
}

fn modules() -> Vec<Module> {
    vec![
        Module {
            id: "fundamentals".to_string(),
            title: "AI Fundamentals".to_string(),
            description: "Core concepts, history, and types of AI".to_string(),
            estimated_hours: 6,
            lessons: vec![
                content(
                    "intro-to-ai",
                    "Introduction to Artificial Intelligence",
                    "90 min",
                    "The history and core ideas of artificial intelligence, from the Turing Test to today's systems.",
                    vec![
                        section(
                            "What is Artificial Intelligence?",
                            "Artificial intelligence is the study of computer systems that perform tasks which would otherwise require human intelligence: recognizing patterns, drawing inferences, planning, and adapting to situations nobody programmed explicitly. The goal is rarely to copy human thought; it is to get intelligent behavior out of machines, whether the mechanism resembles ours or not. AI already sits behind voice assistants, recommendation feeds, route planners, and diagnostic tools.",
                        ),
                        section(
                            "A Brief History",
                            "Alan Turing framed the question of machine intelligence in 1950; John McCarthy coined the term at the 1956 Dartmouth workshop. The field has cycled between enthusiasm and funding winters ever since. The current wave started around 2010, driven by deep learning, cheap computation, and very large datasets.",
                        ),
                        section(
                            "Narrow, General, and Beyond",
                            "Today's systems are narrow AI: excellent at one task, helpless outside it. General AI, a system with human-level flexibility across domains, remains hypothetical, and superintelligence more so. Keeping the distinction straight prevents both hype and unwarranted fear.",
                        ),
                    ],
                    &[
                        "AI aims for intelligent behavior, not a copy of human thought",
                        "The field has alternated between booms and winters since the 1950s",
                        "Every deployed system today is narrow AI",
                    ],
                ),
                content(
                    "ai-vs-ml-vs-dl",
                    "AI vs Machine Learning vs Deep Learning",
                    "75 min",
                    "How the three headline terms nest inside each other, and what each layer actually adds.",
                    vec![
                        section(
                            "Three Concentric Circles",
                            "AI is the outer circle: any technique that produces intelligent behavior, including hand-written rules and search. Machine learning sits inside it: systems that improve from data instead of explicit programming. Deep learning sits inside that: machine learning built on many-layered neural networks. All deep learning is ML, all ML is AI; none of the reverse implications hold.",
                        ),
                        section(
                            "Learning from Data",
                            "A rules engine like Deep Blue never got better at chess by playing it. A machine learning system does improve with experience, which arrives as data. The three classic regimes are supervised learning from labeled examples, unsupervised learning over unlabeled data, and reinforcement learning from rewards.",
                        ),
                        section(
                            "Why Depth Matters",
                            "Stacked network layers learn features at increasing levels of abstraction: edges, then shapes, then objects. That removes most manual feature engineering and is what pushed vision, speech, and language modeling past their long plateaus.",
                        ),
                    ],
                    &[
                        "Deep learning is a subset of machine learning, which is a subset of AI",
                        "Machine learning improves with data; rule-based AI does not",
                        "Layer depth buys automatic feature discovery",
                    ],
                ),
                content(
                    "real-world-applications",
                    "Real-World AI Applications",
                    "60 min",
                    "Where AI is already deployed: healthcare, transportation, finance, and media.",
                    vec![
                        section(
                            "Healthcare",
                            "Image models match specialist radiologists on several diagnostic tasks, structure-prediction systems have reshaped drug discovery timelines, and treatment recommendation engines personalize care from patient history and genetics.",
                        ),
                        section(
                            "Transportation and Logistics",
                            "Autonomous driving stacks fuse computer vision with sensor data; city traffic systems retime lights from live flow; delivery networks plan routes and warehouse moves over thousands of variables at once.",
                        ),
                        section(
                            "Finance and Media",
                            "Fraud detection flags anomalous transactions in real time, trading systems act on market signals in microseconds, and streaming platforms owe most of their engagement to learned recommendation models.",
                        ),
                    ],
                    &[
                        "Deployed AI usually combines several techniques behind one product",
                        "The highest-impact applications are decision support, not autonomy",
                    ],
                ),
                Lesson {
                    id: "fundamentals-quiz".to_string(),
                    title: "AI Fundamentals Quiz".to_string(),
                    duration: "15 min".to_string(),
                    body: LessonBody::Quiz {
                        questions: vec![
                            question(
                                1,
                                "Which statement describes the relationship between AI, machine learning, and deep learning?",
                                &[
                                    "They are separate fields with no overlap",
                                    "Deep learning is a subset of machine learning, which is a subset of AI",
                                    "AI is a subset of machine learning",
                                    "They are three names for the same thing",
                                ],
                                1,
                                "The three nest: every deep learning system is a machine learning system, and every machine learning system is an AI system.",
                            ),
                            question(
                                2,
                                "What separates a machine learning system from a traditional rule-based AI system?",
                                &[
                                    "It always runs faster",
                                    "It improves from data rather than relying only on pre-programmed rules",
                                    "It is always more accurate",
                                    "There is no meaningful difference",
                                ],
                                1,
                                "Learning from experience is the defining trait; rule-based systems never improve however long they run.",
                            ),
                            question(
                                3,
                                "Which of these is an example of narrow AI?",
                                &[
                                    "A chess engine that only plays chess",
                                    "A hypothetical system matching humans at every intellectual task",
                                    "A system surpassing human intelligence everywhere",
                                    "A general-purpose problem solver",
                                ],
                                0,
                                "Narrow AI excels at exactly one domain; the chess engine cannot generalize beyond the board.",
                            ),
                        ],
                    },
                },
            ],
        },
        Module {
            id: "algorithms".to_string(),
            title: "Machine Learning Algorithms".to_string(),
            description: "Decision trees, random forests, clustering techniques".to_string(),
            estimated_hours: 12,
            lessons: vec![
                content(
                    "ml-introduction",
                    "Introduction to Machine Learning",
                    "90 min",
                    "The core idea of learning from data, and the three classic learning regimes.",
                    vec![
                        section(
                            "Generalization is the Point",
                            "A model that memorizes its training set is useless; the entire craft is getting good behavior on data the system has never seen. Everything else in the field, from regularization to validation splits, exists in service of generalization.",
                        ),
                        section(
                            "Supervised, Unsupervised, Reinforcement",
                            "Supervised learning maps labeled inputs to outputs, like spam filtering. Unsupervised learning finds structure in unlabeled data, like customer segmentation. Reinforcement learning optimizes behavior against rewards from an environment, like game play and robot control.",
                        ),
                    ],
                    &[
                        "Models are judged on unseen data, not training data",
                        "The learning signal, labels, structure, or reward, defines the regime",
                    ],
                ),
                content(
                    "trees-and-forests",
                    "Decision Trees and Random Forests",
                    "80 min",
                    "From a single interpretable tree to an ensemble that actually generalizes.",
                    vec![
                        section(
                            "Growing a Tree",
                            "A decision tree splits the data on the feature that best separates the classes, then recurses on each side. The result is a stack of readable if-then rules, which is exactly why single trees overfit: they keep splitting until they have memorized noise.",
                        ),
                        section(
                            "Why Forests Work",
                            "A random forest trains many trees on bootstrapped samples with random feature subsets and averages their votes. Individually noisy, collectively stable; the variance of the ensemble drops without giving up the low bias of deep trees.",
                        ),
                    ],
                    &[
                        "Single trees are interpretable but overfit",
                        "Averaging decorrelated trees trades none of the bias for much less variance",
                    ],
                ),
                Lesson {
                    id: "algorithms-quiz".to_string(),
                    title: "ML Algorithms Quiz".to_string(),
                    duration: "15 min".to_string(),
                    body: LessonBody::Quiz {
                        questions: vec![
                            question(
                                1,
                                "Why do random forests usually beat a single decision tree?",
                                &[
                                    "Each tree sees more data",
                                    "Averaging many decorrelated trees reduces variance",
                                    "Forests never overfit",
                                    "Trees in a forest are deeper",
                                ],
                                1,
                                "Bootstrapping plus random feature selection decorrelates the trees, so their averaged prediction is far more stable.",
                            ),
                            question(
                                2,
                                "Clustering is an example of which learning regime?",
                                &[
                                    "Supervised learning",
                                    "Reinforcement learning",
                                    "Unsupervised learning",
                                    "Transfer learning",
                                ],
                                2,
                                "Clustering groups unlabeled data by similarity; no labels and no reward signal are involved.",
                            ),
                        ],
                    },
                },
            ],
        },
        Module {
            id: "llms".to_string(),
            title: "Large Language Models".to_string(),
            description: "GPT, LLaMA, and transformer architecture".to_string(),
            estimated_hours: 10,
            lessons: vec![
                content(
                    "transformer-architecture",
                    "The Transformer Architecture",
                    "90 min",
                    "Attention, positional encoding, and why transformers displaced recurrent networks.",
                    vec![
                        section(
                            "Attention Instead of Recurrence",
                            "Self-attention lets every token weigh every other token directly, so long-range dependencies stop decaying through a recurrent bottleneck, and the whole computation parallelizes across the sequence. That parallelism, more than any accuracy gain, is what made web-scale training practical.",
                        ),
                        section(
                            "From Architecture to Model Family",
                            "Stacking attention blocks and scaling parameters, data, and compute in tandem produced the GPT and LLaMA families. Scaling behaves predictably enough that model quality can be budgeted in advance.",
                        ),
                    ],
                    &[
                        "Self-attention removed the sequential bottleneck of RNNs",
                        "Predictable scaling turned model training into an engineering discipline",
                    ],
                ),
                content(
                    "prompting-and-context",
                    "Prompting and Context Windows",
                    "60 min",
                    "Getting reliable behavior out of a model you cannot retrain.",
                    vec![
                        section(
                            "The Prompt is the Program",
                            "A deployed language model is controlled almost entirely through its input: instructions, examples, and retrieved context all share one window. Few-shot examples routinely beat clever phrasing, and explicit output formats beat both.",
                        ),
                        section(
                            "Context Budgeting",
                            "The window is finite and attention over it is not free. Retrieval systems exist to spend that budget on the few passages that matter instead of everything that might.",
                        ),
                    ],
                    &[
                        "Examples and structure outperform clever wording",
                        "Context is a budget; retrieval decides how to spend it",
                    ],
                ),
            ],
        },
        Module {
            id: "advanced".to_string(),
            title: "Advanced AI Concepts".to_string(),
            description: "RAG, agentic workflows, AI integration".to_string(),
            estimated_hours: 8,
            lessons: vec![
                content(
                    "retrieval-augmented-generation",
                    "Retrieval-Augmented Generation",
                    "75 min",
                    "Grounding model output in retrieved documents instead of parametric memory.",
                    vec![
                        section(
                            "Why Retrieval",
                            "A model's weights are a lossy, stale snapshot of its training data. RAG pulls relevant passages from an external store at query time and conditions generation on them, which fixes staleness and gives every claim a citable source.",
                        ),
                        section(
                            "The Pipeline",
                            "Documents are chunked and embedded into vectors; a query embeds the same way; nearest neighbors come back as context. Retrieval quality, not model size, is usually the binding constraint.",
                        ),
                    ],
                    &[
                        "RAG trades parametric memory for a queryable external store",
                        "Bad retrieval cannot be papered over by a bigger model",
                    ],
                ),
                content(
                    "agentic-workflows",
                    "Agentic Workflows",
                    "75 min",
                    "Letting models plan, call tools, and iterate toward a goal.",
                    vec![
                        section(
                            "From Answers to Actions",
                            "An agent loop interleaves model reasoning with tool calls: search, code execution, API requests. The model proposes an action, observes the result, and revises its plan, which turns one-shot generation into iterative problem solving.",
                        ),
                        section(
                            "Keeping Agents Honest",
                            "Every added step compounds error, so production agents constrain the loop: typed tool interfaces, budgets on iterations, and checkpoints where a human can inspect the plan.",
                        ),
                    ],
                    &[
                        "Tool use plus iteration converts generation into problem solving",
                        "Constraints and checkpoints are what make agent loops deployable",
                    ],
                ),
            ],
        },
        Module {
            id: "data".to_string(),
            title: "Data Management".to_string(),
            description: "Data quality, medallion architecture".to_string(),
            estimated_hours: 9,
            lessons: vec![
                content(
                    "data-quality",
                    "Data Quality for Machine Learning",
                    "70 min",
                    "Why model quality is bounded by data quality, and how to measure the latter.",
                    vec![
                        section(
                            "Garbage In, Confidently Out",
                            "A model trained on mislabeled, duplicated, or skewed data reproduces those defects fluently. Completeness, consistency, freshness, and label accuracy are measurable properties; teams that track them catch regressions before the model does.",
                        ),
                        section(
                            "Validation as Code",
                            "Schema checks, distribution tests, and referential integrity rules belong in the pipeline, run on every batch, exactly like unit tests on every commit.",
                        ),
                    ],
                    &[
                        "Data defects surface as model defects, only later and more expensively",
                        "Quality checks belong in the pipeline, not in a quarterly audit",
                    ],
                ),
                content(
                    "medallion-architecture",
                    "Medallion Architecture",
                    "65 min",
                    "Bronze, silver, and gold layers: staging raw data into analysis-ready tables.",
                    vec![
                        section(
                            "Three Layers",
                            "Bronze holds raw ingested data exactly as it arrived, silver holds cleaned and conformed tables, and gold holds aggregated, consumer-facing views. Each layer is reproducible from the one below it, so any defect can be traced and replayed.",
                        ),
                        section(
                            "Why Staging Wins",
                            "Keeping raw data immutable makes every downstream transformation disposable. Teams iterate on silver and gold logic freely because bronze preserves the ability to rebuild from scratch.",
                        ),
                    ],
                    &[
                        "Immutable raw data makes every transformation replayable",
                        "Each layer serves a different consumer, from engineers to dashboards",
                    ],
                ),
            ],
        },
    ]
}

fn glossary() -> Vec<GlossaryTerm> {
    fn term(name: &str, definition: &str, category: &str, related: &[&str]) -> GlossaryTerm {
        GlossaryTerm::new(name, definition, category, related)
    }

    vec![
        term(
            "Artificial Intelligence",
            "The simulation of intelligent behavior in machines: systems that learn, reason, and act in ways that would otherwise require human intelligence.",
            "Fundamentals",
            &["Machine Learning", "Deep Learning", "Neural Network"],
        ),
        term(
            "Machine Learning",
            "A subset of AI in which systems improve at a task from experience, learning patterns from data instead of following hand-written rules.",
            "Fundamentals",
            &["Supervised Learning", "Unsupervised Learning", "Algorithm"],
        ),
        term(
            "Deep Learning",
            "Machine learning built on neural networks with many layers, each learning features at a higher level of abstraction than the last.",
            "Fundamentals",
            &["Neural Network", "Backpropagation", "Convolutional Neural Network"],
        ),
        term(
            "Algorithm",
            "A precise sequence of steps a system follows to learn from data or compute a result.",
            "Fundamentals",
            &["Machine Learning", "Model", "Training Data"],
        ),
        term(
            "Model",
            "The learned artifact produced by training: parameters plus architecture, ready to map new inputs to predictions.",
            "Fundamentals",
            &["Algorithm", "Training Data", "Overfitting"],
        ),
        term(
            "Neural Network",
            "A computing system of interconnected nodes organized in layers, loosely inspired by biological neurons, that transforms inputs through learned weights.",
            "Deep Learning",
            &["Deep Learning", "Activation Function", "Backpropagation"],
        ),
        term(
            "Backpropagation",
            "The algorithm that trains neural networks by propagating prediction error backwards through the layers to update each weight.",
            "Deep Learning",
            &["Neural Network", "Gradient Descent"],
        ),
        term(
            "Activation Function",
            "The nonlinearity applied at each network node; without it, stacked layers would collapse into a single linear transformation.",
            "Deep Learning",
            &["Neural Network"],
        ),
        term(
            "Convolutional Neural Network",
            "A network architecture that scans inputs with shared local filters, dominant in image and signal processing.",
            "Deep Learning",
            &["Neural Network", "Deep Learning"],
        ),
        term(
            "Transformer",
            "A network architecture built on self-attention rather than recurrence, underlying modern large language models.",
            "Deep Learning",
            &["Attention", "Large Language Model"],
        ),
        term(
            "Attention",
            "A mechanism letting a model weigh the relevance of every input token to every other, enabling direct long-range dependencies.",
            "Deep Learning",
            &["Transformer"],
        ),
        term(
            "Supervised Learning",
            "Learning from labeled examples: the algorithm sees input-output pairs and learns the mapping between them.",
            "Machine Learning",
            &["Training Data", "Classification", "Regression"],
        ),
        term(
            "Unsupervised Learning",
            "Learning structure from unlabeled data, with no correct answers provided.",
            "Machine Learning",
            &["Clustering", "Dimensionality Reduction"],
        ),
        term(
            "Reinforcement Learning",
            "Learning by acting in an environment and maximizing cumulative reward over time.",
            "Machine Learning",
            &["Reward", "Policy"],
        ),
        term(
            "Classification",
            "Predicting which discrete category an input belongs to, such as spam versus not spam.",
            "Machine Learning",
            &["Supervised Learning", "Regression"],
        ),
        term(
            "Regression",
            "Predicting a continuous numeric value, such as a price or a temperature.",
            "Machine Learning",
            &["Supervised Learning", "Classification"],
        ),
        term(
            "Clustering",
            "Grouping data points by similarity without labels, as in customer segmentation.",
            "Machine Learning",
            &["Unsupervised Learning"],
        ),
        term(
            "Gradient Descent",
            "The optimization procedure that nudges model parameters downhill along the error surface, one small step per batch.",
            "Machine Learning",
            &["Backpropagation", "Model"],
        ),
        term(
            "Training Data",
            "The dataset a model learns from; its size, balance, and label quality bound what the model can achieve.",
            "Data",
            &["Test Data", "Model"],
        ),
        term(
            "Test Data",
            "Data held out from training and used to estimate how the model behaves on inputs it has never seen.",
            "Data",
            &["Training Data", "Overfitting"],
        ),
        term(
            "Overfitting",
            "When a model learns its training data too specifically, noise included, and degrades on new data.",
            "Model Performance",
            &["Test Data", "Regularization"],
        ),
        term(
            "Regularization",
            "Techniques that penalize model complexity during training to improve generalization.",
            "Model Performance",
            &["Overfitting"],
        ),
        term(
            "Large Language Model",
            "A transformer trained on vast text corpora to predict tokens, capable of general-purpose language tasks through prompting.",
            "LLMs",
            &["Transformer", "Prompt", "Token"],
        ),
        term(
            "Prompt",
            "The input text that steers a language model: instructions, examples, and any retrieved context.",
            "LLMs",
            &["Large Language Model", "Context Window"],
        ),
        term(
            "Token",
            "The unit a language model reads and writes, typically a word fragment of a few characters.",
            "LLMs",
            &["Large Language Model", "Context Window"],
        ),
        term(
            "Context Window",
            "The maximum number of tokens a language model can attend to at once; prompt, examples, and output all share it.",
            "LLMs",
            &["Prompt", "Token"],
        ),
        term(
            "Embedding",
            "A dense numeric vector representing a piece of text or other data so that similarity becomes measurable as distance.",
            "Advanced",
            &["Vector Database", "Retrieval-Augmented Generation"],
        ),
        term(
            "Vector Database",
            "A store optimized for nearest-neighbor search over embeddings, the retrieval half of a RAG system.",
            "Advanced",
            &["Embedding", "Retrieval-Augmented Generation"],
        ),
        term(
            "Retrieval-Augmented Generation",
            "Conditioning a language model on documents fetched at query time, grounding its output in citable sources.",
            "Advanced",
            &["Embedding", "Vector Database", "Large Language Model"],
        ),
        term(
            "Reward",
            "The scalar feedback signal a reinforcement learning agent maximizes over time.",
            "Machine Learning",
            &["Reinforcement Learning", "Policy"],
        ),
        term(
            "Policy",
            "An agent's learned mapping from situations to actions.",
            "Machine Learning",
            &["Reinforcement Learning", "Reward"],
        ),
        term(
            "Dimensionality Reduction",
            "Compressing data into fewer features while preserving the structure that matters.",
            "Machine Learning",
            &["Unsupervised Learning", "Embedding"],
        ),
    ]
}

fn exercises() -> Vec<Exercise> {
    fn exercise(
        id: &str,
        title: &str,
        description: &str,
        module_id: &str,
        difficulty: Difficulty,
        estimated_time: &str,
        kind: ExerciseKind,
        skills: &[&str],
    ) -> Exercise {
        Exercise {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            module_id: module_id.to_string(),
            difficulty,
            estimated_time: estimated_time.to_string(),
            kind,
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    vec![
        exercise(
            "decision-tree-builder",
            "Build Your First Decision Tree",
            "Construct and visualize a decision tree classifier on a small dataset",
            "algorithms",
            Difficulty::Beginner,
            "30 min",
            ExerciseKind::InteractiveDemo,
            &["Decision Trees", "Classification"],
        ),
        exercise(
            "clustering-demo",
            "K-Means Clustering Visualization",
            "Watch k-means group data points and experiment with the number of clusters",
            "algorithms",
            Difficulty::Beginner,
            "25 min",
            ExerciseKind::InteractiveDemo,
            &["Clustering", "Unsupervised Learning"],
        ),
        exercise(
            "neural-network-playground",
            "Neural Network Playground",
            "Assemble and train a small network to see how layers and neurons interact",
            "fundamentals",
            Difficulty::Intermediate,
            "45 min",
            ExerciseKind::HandsOnCoding,
            &["Neural Networks", "Backpropagation"],
        ),
        exercise(
            "llm-api-integration",
            "Integrate with a Language Model API",
            "Build a small application that sends prompts to an LLM API and handles the responses",
            "llms",
            Difficulty::Intermediate,
            "45 min",
            ExerciseKind::HandsOnCoding,
            &["API Integration", "Prompting"],
        ),
        exercise(
            "rag-system-builder",
            "Build a RAG System",
            "Wire an embedding store to a language model for retrieval-augmented answers",
            "advanced",
            Difficulty::Advanced,
            "60 min",
            ExerciseKind::Project,
            &["RAG", "Embeddings", "Information Retrieval"],
        ),
        exercise(
            "data-pipeline-design",
            "Design a Data Pipeline",
            "Stage a raw dataset through bronze, silver, and gold layers",
            "data",
            Difficulty::Advanced,
            "50 min",
            ExerciseKind::Project,
            &["Data Engineering", "Data Quality"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_shape_matches_achievement_targets() {
        let catalog = builtin().unwrap();
        assert_eq!(catalog.modules.len(), 5);
        assert_eq!(catalog.module("fundamentals").unwrap().lesson_count(), 4);
        assert_eq!(catalog.module("algorithms").unwrap().lesson_count(), 3);
    }

    #[test]
    fn builtin_has_no_dangling_related_terms() {
        let catalog = builtin().unwrap();
        let violations = super::super::validate::validate(&catalog);
        assert!(violations.is_empty(), "unexpected: {:?}", violations);
    }

    #[test]
    fn every_module_ends_with_searchable_lessons() {
        let catalog = builtin().unwrap();
        for module in &catalog.modules {
            assert!(!module.lessons.is_empty());
            for lesson in &module.lessons {
                assert!(!lesson.title.is_empty());
                if !lesson.is_quiz() {
                    assert!(lesson.overview().map_or(false, |o| !o.is_empty()));
                }
            }
        }
    }
}
