// Code generated by "schemagen --type Roster". DO NOT EDIT.

#[allow(dead_code)]
const _: () = {
    trait __Exact<T: ?Sized> {}
    impl<T: ?Sized> __Exact<T> for T {}
    fn __exact<A: ?Sized + __Exact<B>, B: ?Sized>(_: &A) {}
    /// Stops compiling when the fields of [`Roster`] change; re-run schemagen.
    fn lock(value: &Roster) {
        let Roster { members: f0, by_team: f1, lead: f2, window: f3, pair: f4 } = value;
        __exact::<_, Vec<Member>>(f0);
        __exact::<_, BTreeMap<String, Vec<Member>>>(f1);
        __exact::<_, Option<Box<Member>>>(f2);
        __exact::<_, Window>(f3);
        __exact::<_, (u8, required::Even<u32>)>(f4);
    }
};
/// Type phase of every field of [`Roster`], then their cross-field hooks.
impl ::vouch_validator::TypeValidate for Roster {
    fn type_validate(
        &mut self,
    ) -> ::core::result::Result<(), ::vouch_validator::ValidationError> {
        for (i1, v1) in self.members.iter_mut().enumerate() {
            if let ::core::result::Result::Err(err1) = ::vouch_validator::TypeValidate::type_validate(
                v1,
            ) {
                return ::core::result::Result::Err(
                    err1
                        .within(
                            &::vouch_validator::FieldPath::root()
                                .field("members")
                                .index(&i1),
                        ),
                );
            }
        }
        for (k1, v2) in self.by_team.iter_mut() {
            for (i2, v3) in v2.iter_mut().enumerate() {
                if let ::core::result::Result::Err(err2) = ::vouch_validator::TypeValidate::type_validate(
                    v3,
                ) {
                    return ::core::result::Result::Err(
                        err2
                            .within(
                                &::vouch_validator::FieldPath::root()
                                    .field("by_team")
                                    .index(k1)
                                    .index(&i2),
                            ),
                    );
                }
            }
        }
        if let ::core::option::Option::Some(p1) = &mut self.lead {
            let v4 = &mut **p1;
            if let ::core::result::Result::Err(err3) = ::vouch_validator::TypeValidate::type_validate(
                v4,
            ) {
                return ::core::result::Result::Err(
                    err3.within(&::vouch_validator::FieldPath::root().field("lead")),
                );
            }
        }
        let v5 = &mut self.pair.1;
        if let ::core::result::Result::Err(err4) = ::vouch_validator::TypeValidate::type_validate(
            v5,
        ) {
            return ::core::result::Result::Err(
                err4
                    .within(
                        &::vouch_validator::FieldPath::root().field("pair").field("1"),
                    ),
            );
        }
        let v6 = &self.window;
        if let ::core::result::Result::Err(err5) = ::vouch_validator::Validate::validate(
            v6,
        ) {
            return ::core::result::Result::Err(
                err5
                    .into_cross_field()
                    .within(&::vouch_validator::FieldPath::root().field("window")),
            );
        }
        ::core::result::Result::Ok(())
    }
}
#[allow(dead_code)]
const _: () = {
    trait __Exact<T: ?Sized> {}
    impl<T: ?Sized> __Exact<T> for T {}
    fn __exact<A: ?Sized + __Exact<B>, B: ?Sized>(_: &A) {}
    /// Stops compiling when the fields of [`Member`] change; re-run schemagen.
    fn lock(value: &Member) {
        let Member { name: f0, age: f1, note: f2, draft: f3 } = value;
        __exact::<_, required::NonEmpty<String>>(f0);
        __exact::<_, optional::Positive<u8>>(f1);
        __exact::<_, String>(f2);
        __exact::<_, required::NonEmpty<String>>(f3);
    }
};
/// Type phase of every field of [`Member`], then their cross-field hooks.
impl ::vouch_validator::TypeValidate for Member {
    fn type_validate(
        &mut self,
    ) -> ::core::result::Result<(), ::vouch_validator::ValidationError> {
        let v7 = &mut self.name;
        if let ::core::result::Result::Err(err6) = ::vouch_validator::TypeValidate::type_validate(
            v7,
        ) {
            return ::core::result::Result::Err(
                err6.within(&::vouch_validator::FieldPath::root().field("Name")),
            );
        }
        let v8 = &mut self.age;
        if let ::core::result::Result::Err(err7) = ::vouch_validator::TypeValidate::type_validate(
            v8,
        ) {
            return ::core::result::Result::Err(
                err7.within(&::vouch_validator::FieldPath::root().field("age")),
            );
        }
        ::core::result::Result::Ok(())
    }
}
