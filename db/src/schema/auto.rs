table! {
    books (id) {
        id -> Integer,
        name -> Text,
        hebrew_name -> Text,
        paleo_name -> Text,
        phonetic_name -> Nullable<Text>,
        order -> Integer,
        testament -> Text,
    }
}

table! {
    chapters (id) {
        id -> Integer,
        book_id -> Integer,
        chapter_number -> Integer,
    }
}

table! {
    verses (id) {
        id -> Integer,
        chapter_id -> Integer,
        verse_number -> Integer,
        hebrew_text -> Text,
        hebrew_consonantal -> Text,
        paleo_text -> Text,
        paleo_transliteration -> Text,
        english_translation -> Nullable<Text>,
        strong_numbers -> Nullable<Text>,
        morphology -> Nullable<Text>,
        notes -> Nullable<Text>,
        created_at -> Nullable<Timestamp>,
        updated_at -> Nullable<Timestamp>,
    }
}

table! {
    god_facts (id) {
        id -> Integer,
        title -> Text,
        content -> Text,
        category -> Text,
        source -> Nullable<Text>,
        image_filename -> Nullable<Text>,
        video_filename -> Nullable<Text>,
        status -> Text,
        views -> Integer,
        featured -> Bool,
        created_at -> Nullable<Timestamp>,
        updated_at -> Nullable<Timestamp>,
    }
}

table! {
    paleo_letters (id) {
        id -> Integer,
        letter -> Text,
        paleo_symbol -> Text,
        name -> Text,
        meaning -> Text,
        pictograph_description -> Text,
        sound -> Text,
        numerical_value -> Nullable<Integer>,
        order -> Integer,
    }
}

table! {
    words (id) {
        id -> Integer,
        hebrew_word -> Text,
        paleo_word -> Text,
        transliteration -> Text,
        pronunciation -> Text,
        meaning -> Text,
        root_analysis -> Nullable<Text>,
        created_at -> Nullable<Timestamp>,
    }
}

table! {
    strongs_hebrew (id) {
        id -> Integer,
        strong_number -> Text,
        hebrew_word -> Text,
        paleo_word -> Nullable<Text>,
        transliteration -> Text,
        pronunciation -> Nullable<Text>,
        short_definition -> Text,
        long_definition -> Nullable<Text>,
        usage_count -> Integer,
        root_word -> Nullable<Text>,
        part_of_speech -> Nullable<Text>,
        created_at -> Nullable<Timestamp>,
    }
}

table! {
    strongs_greek (id) {
        id -> Integer,
        strong_number -> Text,
        greek_word -> Text,
        transliteration -> Text,
        pronunciation -> Nullable<Text>,
        short_definition -> Text,
        long_definition -> Nullable<Text>,
        usage_count -> Integer,
        root_word -> Nullable<Text>,
        part_of_speech -> Nullable<Text>,
        created_at -> Nullable<Timestamp>,
    }
}

joinable!(chapters -> books (book_id));
joinable!(verses -> chapters (chapter_id));

allow_tables_to_appear_in_same_query!(
    books,
    chapters,
    verses,
    god_facts,
    paleo_letters,
    words,
    strongs_hebrew,
    strongs_greek,
);
