// Built-in crisis keyword lists
//
// English phrases plus common Hindi transliterations. Matching is
// case-insensitive substring containment, so entries are stored lower-case.

pub(super) const HIGH_RISK: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "want to die",
    "harm myself",
    "end my life",
    "going to kill myself",
    "suicide plan",
    "ending it tonight",
    "better off dead",
    "no reason to live",
    "going to end it all",
    "aatma hatya",
    "khudkushi",
    "jeena band karna",
    "marne ka irada",
];

pub(super) const MEDIUM_RISK: &[&str] = &[
    "don't want to live",
    "tired of living",
    "can't go on",
    "give up",
    "self harm",
    "cut myself",
    "hurt myself",
    "overdose",
    "jump off",
    "nothing matters",
    "everyone would be better without me",
    "jeene ka man nahi",
    "sab khatam ho gaya",
    "kuch nahi raha",
];

pub(super) const LOW_RISK: &[&str] = &[
    "hopeless",
    "no point",
    "can't take it",
    "overwhelmed",
    "broken",
    "empty inside",
    "numb",
    "lost",
    "alone",
    "no one cares",
    "udaas",
    "nirash",
    "thak gaya",
    "akela",
];
