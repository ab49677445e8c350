use std::str::FromStr;

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set, SqlErr};
use uuid::Uuid;

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::{Movie, NewMovie},
};

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Movie>> {
        let row = movie::Entity::find_by_id(id).one(&self.db).await?;
        row.map(Movie::try_from).transpose()
    }

    pub async fn find_all(&self) -> AppResult<Vec<Movie>> {
        let rows = movie::Entity::find().all(&self.db).await?;
        rows.into_iter().map(Movie::try_from).collect()
    }

    /// Inserts `new` under a fresh id. A duplicate `code` is an input error.
    pub async fn save(&self, new: NewMovie) -> AppResult<Movie> {
        let id = Uuid::new_v4();
        let model = movie::ActiveModel {
            id: Set(id),
            code: Set(new.code.clone()),
            name: Set(new.name.clone()),
            price: Set(new.price.to_string()),
            is_available: Set(new.is_available),
        };

        movie::Entity::insert(model).exec(&self.db).await.map_err(|err| {
            if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                AppError::DuplicateCode(new.code.clone())
            } else {
                AppError::Database(err)
            }
        })?;

        Ok(Movie {
            id,
            code: new.code,
            name: new.name,
            price: new.price,
            is_available: new.is_available,
        })
    }
}

impl TryFrom<movie::Model> for Movie {
    type Error = AppError;

    fn try_from(row: movie::Model) -> AppResult<Self> {
        let price = Decimal::from_str(&row.price).map_err(|e| {
            DbErr::Custom(format!("movie {} has unreadable price {:?}: {e}", row.id, row.price))
        })?;
        Ok(Self {
            id: row.id,
            code: row.code,
            name: row.name,
            price,
            is_available: row.is_available,
        })
    }
}
