use super::prelude::*;

pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    let Some(mut user) = repo.try_get_user_by_email(login.email)? else {
        return Err(Error::Credentials);
    };
    if !user.password.verify(login.password) {
        return Err(Error::Credentials);
    }
    if !user.is_active {
        return Err(Error::UserInactive);
    }
    user.last_login = Some(Timestamp::now());
    repo.update_user(&user)?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };

    fn register(db: &MockDb) -> EmailAddress {
        create_new_user(
            db,
            UserRegistration {
                email: "foo@bar.com".into(),
                password: "secret".into(),
                ..Default::default()
            },
        )
        .unwrap();
        EmailAddress::new_unchecked("foo@bar.com".into())
    }

    #[test]
    fn login_with_valid_credentials() {
        let db = MockDb::default();
        let email = register(&db);
        let user = login_with_email(
            &db,
            &Credentials {
                email: &email,
                password: "secret",
            },
        )
        .unwrap();
        assert!(user.last_login.is_some());
        assert_eq!(db.get_user(user.id).unwrap().last_login, user.last_login);
    }

    #[test]
    fn login_with_wrong_password_or_unknown_user() {
        let db = MockDb::default();
        let email = register(&db);
        assert!(matches!(
            login_with_email(
                &db,
                &Credentials {
                    email: &email,
                    password: "wrong!",
                }
            ),
            Err(Error::Credentials)
        ));
        let unknown = EmailAddress::new_unchecked("bar@foo.com".into());
        assert!(matches!(
            login_with_email(
                &db,
                &Credentials {
                    email: &unknown,
                    password: "secret",
                }
            ),
            Err(Error::Credentials)
        ));
    }

    #[test]
    fn inactive_users_cannot_login() {
        let db = MockDb::default();
        let email = register(&db);
        let mut user = db.get_user_by_email(&email).unwrap();
        user.is_active = false;
        db.update_user(&user).unwrap();
        assert!(matches!(
            login_with_email(
                &db,
                &Credentials {
                    email: &email,
                    password: "secret",
                }
            ),
            Err(Error::UserInactive)
        ));
    }
}
