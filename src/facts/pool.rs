use rand::Rng;

/// Facts shown when the remote endpoint cannot be reached
pub const FALLBACK_FACTS: [&str; 10] = [
    "Cats sleep for about 70% of their lives.",
    "A group of cats is called a clowder.",
    "Cats have over 20 vocalizations, including the purr.",
    "A cat's hearing is much more sensitive than a human's or dog's.",
    "Cats can rotate their ears 180 degrees.",
    "The first cat in space was a French cat named Felicette in 1963.",
    "Cats have a specialized collarbone that allows them to always land on their feet.",
    "A cat can jump up to six times its length.",
    "Cats spend about 30-50% of their day grooming themselves.",
    "The oldest known pet cat was found in a 9,500-year-old grave on Cyprus.",
];

/// Pick a fallback fact uniformly at random
pub fn pick_fallback<R: Rng>(rng: &mut R) -> &'static str {
    FALLBACK_FACTS[rng.gen_range(0..FALLBACK_FACTS.len())]
}
