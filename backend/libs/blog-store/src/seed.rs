//! Demo data the server starts with when seeding is enabled.

use crate::model::{Comment, Post, User};

fn user(id: &str, full_name: &str, age: i32) -> User {
    User {
        id: id.to_string(),
        full_name: full_name.to_string(),
        age,
    }
}

fn post(id: &str, title: &str, user_id: &str) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        user_id: user_id.to_string(),
    }
}

fn comment(id: &str, text: &str, post_id: &str, user_id: &str) -> Comment {
    Comment {
        id: id.to_string(),
        text: text.to_string(),
        post_id: post_id.to_string(),
        user_id: user_id.to_string(),
    }
}

pub fn users() -> Vec<User> {
    vec![user("1", "Mehmet Seven", 29), user("2", "Ahmet Günal", 32)]
}

pub fn posts() -> Vec<Post> {
    vec![
        post("1", "Mehmet'in Gönderisi", "1"),
        post("2", "Mehmet'in Diğer Gönderisi", "1"),
        post("3", "Ahmet'in Gönderisi", "2"),
    ]
}

pub fn comments() -> Vec<Comment> {
    vec![
        comment("1", "Bu Ahmet'in Yorumudur", "1", "2"),
        comment("2", "Bu Mehmet'in Yorumudur", "1", "1"),
        comment("3", "foo bar", "2", "2"),
        comment("4", "foo bar baz", "3", "1"),
    ]
}
