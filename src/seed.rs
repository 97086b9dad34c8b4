// src/seed.rs

use crate::models::question::{DifficultyLevel, NewQuestion, Topic};

fn question(
    question_text: &str,
    options: [&str; 4],
    correct_answer: i64,
    explanation: &str,
    topic: Topic,
    difficulty_level: DifficultyLevel,
) -> NewQuestion {
    NewQuestion {
        question_text: question_text.to_string(),
        options: options.iter().map(|opt| opt.to_string()).collect(),
        correct_answer,
        explanation: explanation.to_string(),
        topic,
        difficulty_level,
    }
}

/// The fixed sample set: 10 questions spanning all five topics.
pub fn sample_questions() -> Vec<NewQuestion> {
    vec![
        question(
            "How many layers are in the OSI model?",
            ["5", "6", "7", "8"],
            2,
            "The OSI model has 7 layers: Physical, Data Link, Network, Transport, Session, Presentation, and Application.",
            Topic::OsiModel,
            DifficultyLevel::Beginner,
        ),
        question(
            "Which OSI layer is responsible for routing packets?",
            ["Layer 2", "Layer 3", "Layer 4", "Layer 5"],
            1,
            "Layer 3 (Network layer) is responsible for routing packets between different networks using IP addresses.",
            Topic::OsiModel,
            DifficultyLevel::Beginner,
        ),
        question(
            "What is the subnet mask for a /24 network?",
            ["255.255.0.0", "255.255.255.0", "255.255.255.128", "255.0.0.0"],
            1,
            "A /24 network uses 24 bits for the network portion, resulting in a subnet mask of 255.255.255.0.",
            Topic::Subnetting,
            DifficultyLevel::Intermediate,
        ),
        question(
            "How many host addresses are available in a /26 subnet?",
            ["62", "64", "126", "128"],
            0,
            "A /26 subnet has 6 host bits (32-26=6), giving 2^6 = 64 total addresses. Subtract 2 for network and broadcast: 64-2 = 62 host addresses.",
            Topic::Subnetting,
            DifficultyLevel::Intermediate,
        ),
        question(
            "Which routing protocol uses the Dijkstra algorithm?",
            ["RIP", "EIGRP", "OSPF", "BGP"],
            2,
            "OSPF (Open Shortest Path First) uses the Dijkstra algorithm to calculate the shortest path tree for routing decisions.",
            Topic::RoutingProtocols,
            DifficultyLevel::Advanced,
        ),
        question(
            "What is the maximum hop count for RIP?",
            ["15", "16", "255", "Unlimited"],
            0,
            "RIP has a maximum hop count of 15. A hop count of 16 is considered infinite and unreachable.",
            Topic::RoutingProtocols,
            DifficultyLevel::Intermediate,
        ),
        question(
            "What does VLAN stand for?",
            [
                "Virtual Local Area Network",
                "Very Large Area Network",
                "Variable Link Access Network",
                "Verified LAN Access Network",
            ],
            0,
            "VLAN stands for Virtual Local Area Network, which allows logical segmentation of a physical network.",
            Topic::Switching,
            DifficultyLevel::Beginner,
        ),
        question(
            "What is the default VLAN ID on Cisco switches?",
            ["0", "1", "2", "100"],
            1,
            "The default VLAN ID on Cisco switches is VLAN 1, which is the default VLAN for all switchports.",
            Topic::Switching,
            DifficultyLevel::Beginner,
        ),
        question(
            "Which IP address class has a default subnet mask of 255.255.0.0?",
            ["Class A", "Class B", "Class C", "Class D"],
            1,
            "Class B networks use a default subnet mask of 255.255.0.0 (/16), providing 16 bits for the network and 16 bits for hosts.",
            Topic::IpAddressing,
            DifficultyLevel::Intermediate,
        ),
        question(
            "What type of address is 192.168.1.1?",
            ["Public IP", "Private IP", "Loopback IP", "Multicast IP"],
            1,
            "192.168.1.1 is a private IP address. The 192.168.0.0/16 range is reserved for private networks and cannot be routed on the internet.",
            Topic::IpAddressing,
            DifficultyLevel::Beginner,
        ),
    ]
}
