//! Reference hero catalog
//!
//! 25 heroes in a fixed order; with the default page size of 5 this yields
//! five full pages.

use crate::domain::Hero;

#[allow(clippy::too_many_arguments)]
fn hero(
    id: u32,
    name: &str,
    about: &str,
    rating: f64,
    power: u32,
    month: &str,
    day: &str,
    family: &[&str],
    abilities: &[&str],
    nature_types: &[&str],
) -> Hero {
    let to_vec = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
    Hero {
        id,
        name: name.to_string(),
        image: format!("/images/{}.jpg", name.to_lowercase()),
        about: about.to_string(),
        rating,
        power,
        month: month.to_string(),
        day: day.to_string(),
        family: to_vec(family),
        abilities: to_vec(abilities),
        nature_types: to_vec(nature_types),
    }
}

/// Build the reference catalog.
pub fn reference_heroes() -> Vec<Hero> {
    vec![
        // ── Page 1 ─────────────────────────────────────────────
        hero(
            1,
            "Sasuke",
            "Sasuke Uchiha is one of the last surviving members of the Uchiha clan. \
             He later works in the shadows to protect the Hidden Leaf.",
            5.0,
            98,
            "July",
            "23rd",
            &["Fugaku", "Mikoto", "Itachi", "Sarada", "Sakura"],
            &["Sharingan", "Rinnegan", "Sussano", "Amateratsu", "Intelligence"],
            &["Lightning", "Fire", "Wind", "Earth", "Water"],
        ),
        hero(
            2,
            "Naruto",
            "Naruto Uzumaki is the host of the Nine-Tails and the Seventh Hokage \
             of the Hidden Leaf Village.",
            5.0,
            98,
            "Oct",
            "10th",
            &["Minato", "Kushina", "Boruto", "Himawari", "Hinata"],
            &["Rasengan", "Rasen-Shuriken", "Shadow Clone", "Senin Mode"],
            &["Wind", "Earth", "Lava", "Fire"],
        ),
        hero(
            3,
            "Sakura",
            "Sakura Haruno is a medical-nin of the Hidden Leaf whose chakra control \
             rivals that of the Fifth Hokage.",
            4.5,
            92,
            "Mar",
            "28th",
            &["Kizashi", "Mebuki", "Sarada", "Sasuke"],
            &["Chakra Control", "Medical Ninjutsu", "Strength", "Intelligence"],
            &["Earth", "Water", "Fire"],
        ),
        hero(
            4,
            "Boruto",
            "Boruto Uzumaki is the son of the Seventh Hokage and a member of Team Konohamaru.",
            4.0,
            95,
            "Mar",
            "27th",
            &["Naruto", "Hinata", "Himawari"],
            &["Karma", "Jogan", "Rasengan", "Intelligence"],
            &["Lightning", "Wind", "Water"],
        ),
        hero(
            5,
            "Sarada",
            "Sarada Uchiha is a kunoichi of the Uchiha clan who dreams of becoming Hokage.",
            4.0,
            90,
            "Mar",
            "31st",
            &["Sasuke", "Sakura"],
            &["Sharingan", "Strength", "Intelligence"],
            &["Lightning", "Wind", "Fire"],
        ),
        // ── Page 2 ─────────────────────────────────────────────
        hero(
            6,
            "Kawaki",
            "Kawaki is a vessel of the Kara organisation who was taken in by the Uzumaki family.",
            4.0,
            92,
            "Jan",
            "1st",
            &["Naruto", "Hinata", "Boruto"],
            &["Karma", "Mastery Nature Transformation", "Shape Transformation"],
            &["Earth"],
        ),
        hero(
            7,
            "Hinata",
            "Hinata Hyuga is a kunoichi of the Hyuga clan and the wife of the Seventh Hokage.",
            4.0,
            88,
            "Dec",
            "27th",
            &["Hiashi", "Hanabi", "Naruto", "Boruto", "Himawari"],
            &["Byakugan", "Gentle Fist", "Twin Lion Fists"],
            &["Fire", "Lightning"],
        ),
        hero(
            8,
            "Mitsuki",
            "Mitsuki is a synthetic human created by Orochimaru and a member of Team Konohamaru.",
            4.0,
            88,
            "Jul",
            "25th",
            &["Orochimaru"],
            &["Sage Mode", "Snake Arts", "Intelligence"],
            &["Wind", "Lightning"],
        ),
        hero(
            9,
            "Kakashi",
            "Kakashi Hatake is the former leader of Team 7 and the Sixth Hokage.",
            4.5,
            95,
            "Sep",
            "15th",
            &["Sakumo"],
            &["Chidori", "Lightning Blade", "Copy Ninja"],
            &["Lightning", "Water", "Fire", "Earth", "Wind"],
        ),
        hero(
            10,
            "Shikamaru",
            "Shikamaru Nara is a strategist of the Hidden Leaf and advisor to the Seventh Hokage.",
            4.0,
            85,
            "Sep",
            "22nd",
            &["Shikaku", "Yoshino", "Temari", "Shikadai"],
            &["Shadow Possession", "Intelligence"],
            &["Fire", "Earth"],
        ),
        // ── Page 3 ─────────────────────────────────────────────
        hero(
            11,
            "Gaara",
            "Gaara is the Fifth Kazekage of the Hidden Sand Village.",
            4.5,
            90,
            "Jan",
            "19th",
            &["Rasa", "Karura", "Temari", "Kankuro"],
            &["Sand Manipulation", "Absolute Defense"],
            &["Wind", "Earth"],
        ),
        hero(
            12,
            "Himawari",
            "Himawari Uzumaki is the daughter of the Seventh Hokage and an heir to the Byakugan.",
            3.5,
            80,
            "Nov",
            "14th",
            &["Naruto", "Hinata", "Boruto"],
            &["Byakugan", "Gentle Fist"],
            &["Wind"],
        ),
        hero(
            13,
            "Orochimaru",
            "Orochimaru is one of the Legendary Sannin who pursues the secrets of immortality.",
            4.5,
            94,
            "Oct",
            "27th",
            &["Mitsuki"],
            &["Immortality", "Snake Arts", "Sage Mode", "Intelligence"],
            &["Wind", "Earth", "Fire", "Water", "Lightning"],
        ),
        hero(
            14,
            "Jiraiya",
            "Jiraiya is one of the Legendary Sannin and the teacher of the Fourth Hokage.",
            4.5,
            93,
            "Nov",
            "11th",
            &[],
            &["Sage Mode", "Rasengan", "Summoning"],
            &["Fire", "Earth", "Water", "Wind"],
        ),
        hero(
            15,
            "Tsunade",
            "Tsunade is one of the Legendary Sannin and the Fifth Hokage.",
            4.5,
            93,
            "Aug",
            "2nd",
            &["Hashirama", "Mito", "Nawaki"],
            &["Strength", "Medical Ninjutsu", "Creation Rebirth"],
            &["Earth", "Water", "Fire", "Lightning"],
        ),
        // ── Page 4 ─────────────────────────────────────────────
        hero(
            16,
            "Isshiki",
            "Isshiki Otsutsuki is a celestial being who came to Earth to plant a Divine Tree.",
            5.0,
            100,
            "Jan",
            "1st",
            &["Kaguya"],
            &["Sukunahikona", "Daikokuten", "Byakugan", "Rinnegan"],
            &["Lightning", "Fire", "Wind", "Water", "Earth"],
        ),
        hero(
            17,
            "Momoshiki",
            "Momoshiki Otsutsuki is a celestial being who absorbs techniques through his Rinnegan.",
            4.0,
            97,
            "Jan",
            "1st",
            &["Kinshiki"],
            &["Rinnegan", "Byakugan", "Karma"],
            &["Fire", "Water", "Wind", "Earth", "Lightning"],
        ),
        hero(
            18,
            "Kinshiki",
            "Kinshiki Otsutsuki is a celestial being who served Momoshiki.",
            3.5,
            92,
            "Jan",
            "1st",
            &["Momoshiki"],
            &["Chakra Weapons", "Strength"],
            &["Earth"],
        ),
        hero(
            19,
            "Urashiki",
            "Urashiki Otsutsuki is a celestial being able to travel through time.",
            4.0,
            94,
            "Jan",
            "1st",
            &[],
            &["Rinne Sharingan", "Byakugan", "Time Travel"],
            &["Wind"],
        ),
        hero(
            20,
            "Toneri",
            "Toneri Otsutsuki is a descendant of Hamura who lived on the moon.",
            3.5,
            91,
            "Jan",
            "1st",
            &["Hamura"],
            &["Tenseigan", "Puppetry"],
            &["Wind", "Water"],
        ),
        // ── Page 5 ─────────────────────────────────────────────
        hero(
            21,
            "Itachi",
            "Itachi Uchiha is a prodigy of the Uchiha clan and the older brother of Sasuke.",
            5.0,
            96,
            "Jun",
            "9th",
            &["Fugaku", "Mikoto", "Sasuke"],
            &["Sharingan", "Tsukuyomi", "Amaterasu", "Susanoo"],
            &["Fire", "Water", "Wind"],
        ),
        hero(
            22,
            "Madara",
            "Madara Uchiha is a co-founder of the Hidden Leaf Village.",
            5.0,
            99,
            "Dec",
            "24th",
            &["Tajima", "Izuna"],
            &["Sharingan", "Rinnegan", "Susanoo", "Wood Release"],
            &["Fire", "Wind", "Lightning", "Earth", "Water"],
        ),
        hero(
            23,
            "Obito",
            "Obito Uchiha is a former teammate of Kakashi who led the Fourth Shinobi World War.",
            4.5,
            95,
            "Feb",
            "10th",
            &[],
            &["Sharingan", "Kamui", "Wood Release"],
            &["Fire", "Wind"],
        ),
        hero(
            24,
            "Minato",
            "Minato Namikaze is the Fourth Hokage, known as the Yellow Flash of the Leaf.",
            5.0,
            96,
            "Jan",
            "25th",
            &["Kushina", "Naruto"],
            &["Flying Raijin", "Rasengan", "Sage Mode"],
            &["Wind", "Lightning", "Fire"],
        ),
        hero(
            25,
            "Kushina",
            "Kushina Uzumaki is the former host of the Nine-Tails and the mother of Naruto.",
            4.0,
            90,
            "Jul",
            "10th",
            &["Minato", "Naruto"],
            &["Adamantine Sealing Chains", "Sealing Jutsu"],
            &["Wind", "Water"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let heroes = reference_heroes();
        assert_eq!(heroes.len(), 25);
        for (i, h) in heroes.iter().enumerate() {
            assert_eq!(h.id as usize, i + 1);
        }
    }

    #[test]
    fn images_live_under_images_prefix() {
        assert!(reference_heroes()
            .iter()
            .all(|h| h.image.starts_with("/images/") && h.image.ends_with(".jpg")));
    }
}
